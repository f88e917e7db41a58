// Shared prompt constants and prompt-building utilities.
// Each pipeline that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Every artifact the pipelines produce is in English.
pub const ENGLISH_INSTRUCTION: &str = "All of your output must be in English.";

/// Contact details must come from evidence, never from inference.
pub const CONTACT_GROUNDING_INSTRUCTION: &str = "\
    CRITICAL EMAIL RULE: Only report an email address if it appears verbatim in the evidence \
    you were given. NEVER invent, guess or complete an email (e.g. contact@company.com without \
    evidence). If no email was found, write exactly 'EMAIL_NOT_FOUND'.";

/// Fills `{placeholder}` slots in a prompt template.
///
/// Single pass over the template: substituted values are never scanned again, so a
/// value that itself contains `{slot}` text is inserted literally.
pub fn fill_template(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let slot = after
            .find('}')
            .map(|close| &after[..close])
            .and_then(|key| slots.iter().find(|(k, _)| *k == key).map(|(_, v)| (key, *v)));

        match slot {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
