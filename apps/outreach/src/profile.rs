//! The applicant profile embedded in every outreach prompt.

/// Who is writing the emails. `Default` carries the built-in profile.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub name: &'static str,
    pub age: u8,
    pub availability: &'static str,
    pub tech: &'static str,
    pub proof: &'static str,
    pub stats: &'static str,
    /// Market the critic reviews the email for.
    pub target_market: &'static str,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: "Afonso",
            age: 18,
            availability: "July 1st - Sept 30th, 2026",
            tech: "Python (Automation/Agents), JS (Algorithms), SQL",
            proof: "Built a Job Hunting Agent (Python) + Sudoku Solver (Backtracking in JS)",
            stats: "18.4 Math GPA",
            target_market: "Zurich tech startup",
        }
    }
}

impl CandidateProfile {
    /// Bullet list used inside prompts.
    pub fn to_prompt_block(&self) -> String {
        format!(
            "- Name: {} ({}).\n\
             - Availability: {}.\n\
             - Tech: {}.\n\
             - Proof: {}.\n\
             - Stats: {}.",
            self.name, self.age, self.availability, self.tech, self.proof, self.stats
        )
    }
}
