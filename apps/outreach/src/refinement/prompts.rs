// All LLM prompt constants for the refinement loop.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for the draft writer.
pub const WRITER_SYSTEM: &str = "You are a cold-outreach copywriter helping a student land \
    a summer internship at a small tech company. You write short, concrete, humble emails. \
    You never change the recipient address you are given.";

/// Draft prompt. Replace `{target_info}`, `{contact}`, `{profile}`, `{critique}`,
/// `{language_instruction}` before sending.
pub const WRITER_PROMPT_TEMPLATE: &str = r#"TARGET COMPANY INFO:
{target_info}

TARGET CONTACT (STRICT, copy it exactly into the To: line): {contact}

MY PROFILE:
{profile}

INSTRUCTIONS:
1. **Analyze the Industry:** Based strictly on the 'TARGET COMPANY INFO', determine if they are Fintech, AI, SaaS, GreenTech, etc.
2. **Customize the Pain Point:**
   - If Fintech -> Offer SQL/Data Integrity.
   - If AI/ML -> Offer Python Scripts/Data Labelling.
   - If Web SaaS -> Offer React Components/Testing.
3. **Write the Email:**
   - Use a unique opening hook based on their industry.
   - Mention "Grunt Work" (cleaning data, tests, dashboards).
   - State the availability dates.
   - Keep it short and punchy.
4. {language_instruction}

STRICT OUTPUT FORMAT:
To: {contact}
Subject: [Creative Subject about "Grunt Work" for their Industry]

[Email Body]

PREVIOUS CRITIQUE: {critique}"#;

/// System prompt for the critic.
pub const CRITIC_SYSTEM: &str = "You are a Career Strategy Mentor reviewing cold emails \
    written by a student. You judge strategy first, grammar second.";

/// Review prompt. Replace `{market}`, `{draft}`, `{availability}`, `{tech}`,
/// `{sentinel}`, `{approval_keyword}` before sending.
pub const CRITIC_PROMPT_TEMPLATE: &str = r#"Review this cold email draft specifically for a {market}:

{draft}

VALIDATION CHECKLIST (Focus on the STRATEGY, not just grammar):

1. **Language:** Is the whole email written in English?
2. **The "Grunt Work" Value Prop:** Does the email clearly convey that the applicant wants to do the boring tasks (data cleaning, QA, internal tools) to save the senior team time? (It doesn't need the exact words "grunt work", but the concept must be clear.)
3. **Logistics:** Are the dates ({availability}) clearly stated?
4. **Tech Integrity:** Is the tech stack ({tech}) attributed to the right projects?
5. **Safety Check:** Is the 'To:' field either a valid email with '@', a contact URL, OR exactly "{sentinel}"?

DECISION RULES:
- **PASS:** If the logic is sound and the offer is helpful, reply exactly: {approval_keyword}.
- **FAIL:** If the email sounds too arrogant (like he's teaching them) OR if he forgets to offer help with the boring tasks, tell him to fix the tone.
- **FAIL:** If dates or tech stack are mixed up.

Output your feedback clearly."#;
