//! Field-specific prompts for the model backend.
//!
//! One focused prompt per field. Multi-field single-shot prompts proved
//! brittle (cross-field bleed, fragile JSON parsing), so each prompt asks
//! for exactly one value under a strict output contract with a not-found
//! sentinel.

use crate::types::FieldKind;

/// Sentinel the model must return when the field is absent.
pub const NOT_FOUND: &str = "NOT_FOUND";

pub const COMPANY_PROMPT: &str = r#"Extract one field from a job posting: the company name.

Look for the employer or organization name. Check phrases like "Company:",
"About us:", "join our team at", and email domains (hr@helium.com suggests
"Helium").

Examples:
Text: "Helium Bangladesh is hiring! Position: HR Intern"
Answer: Helium Bangladesh

Text: "Contact us at hr@cityscapebd.com"
Answer: Cityscape

Text: "Exciting opportunity for a React developer."
Answer: NOT_FOUND

Return ONLY the company name, or NOT_FOUND if it is genuinely absent from
the text. No explanation, no extra punctuation.

Job posting:
{text}"#;

pub const POSITION_PROMPT: &str = r#"Extract one field from a job posting: the job title.

Look for "Job Title:", "Position:", "Role:", "Hiring for:", "Vacancy:", or a
prominent heading. Keep the title exactly as written.

Examples:
Text: "Position: Intern - Human Resources (HR)"
Answer: Intern - Human Resources (HR)

Text: "We need a senior backend engineer for our Dhaka office"
Answer: Senior Backend Engineer

Text: "Our company had a great year."
Answer: NOT_FOUND

Return ONLY the job title, or NOT_FOUND if it is genuinely absent from the
text. No explanation, no extra punctuation.

Job posting:
{text}"#;

pub const LOCATION_PROMPT: &str = r#"Extract one field from a job posting: the work location.

Look for "Location:", "Office:", "Workplace:", city names (Dhaka, Chattogram),
area names (Gulshan, Banani, Niketon), or remote-work wording. Answer
"Remote" for work-from-home roles.

Examples:
Text: "Job Location: Dhaka (Niketon)"
Answer: Dhaka (Niketon)

Text: "This is a fully remote position"
Answer: Remote

Text: "Salary: BDT 30,000"
Answer: NOT_FOUND

Return ONLY the location, or NOT_FOUND if it is genuinely absent from the
text. No explanation, no extra punctuation.

Job posting:
{text}"#;

pub const SALARY_PROMPT: &str = r#"Extract one field from a job posting: the salary or compensation.

Look for "Salary:", "Compensation:", "Pay:", amounts with BDT, Tk, ৳, $, or
USD, ranges, and qualifiers like "Negotiable". Include the currency and the
full details found.

Examples:
Text: "Monthly Salary: Tk. 22,000 - 30,000 per month"
Answer: Tk. 22,000 - 30,000 per month

Text: "Salary: Negotiable based on experience"
Answer: Negotiable

Text: "Join our team in Dhaka."
Answer: NOT_FOUND

Return ONLY the salary details, or NOT_FOUND if they are genuinely absent
from the text. No explanation.

Job posting:
{text}"#;

pub const DEADLINE_PROMPT: &str = r#"Extract one field from a job posting: the application deadline.

Look for "Deadline:", "Apply by:", "Last date:", "Applications close:",
"Valid till:", or any date mentioned with deadline context.

Examples:
Text: "Application deadline: February 15, 2026"
Answer: 2026-02-15

Text: "Apply by 01/03/2026"
Answer: 2026-03-01

Text: "We are always hiring."
Answer: NOT_FOUND

Return ONLY the date in YYYY-MM-DD format, or NOT_FOUND if no deadline is
present in the text. No explanation.

Job posting:
{text}"#;

pub const DESCRIPTION_PROMPT: &str = r#"Summarize a job posting in one or two sentences.

Capture the key responsibilities or the nature of the role in at most 200
characters. Do not repeat the company name, salary, or deadline.

Examples:
Text: "We are seeking a passionate HR intern to assist with recruitment,
onboarding, and employee engagement activities."
Answer: HR internship assisting with recruitment, onboarding, and employee engagement.

Text: "asdfgh"
Answer: NOT_FOUND

Return ONLY the summary, or NOT_FOUND if the text is not a job posting.

Job posting:
{text}"#;

/// The prompt template for a field.
pub fn template(field: FieldKind) -> &'static str {
    match field {
        FieldKind::Company => COMPANY_PROMPT,
        FieldKind::Position => POSITION_PROMPT,
        FieldKind::Location => LOCATION_PROMPT,
        FieldKind::Salary => SALARY_PROMPT,
        FieldKind::Deadline => DEADLINE_PROMPT,
        FieldKind::Description => DESCRIPTION_PROMPT,
    }
}

/// Interpolate the (already truncated) source text into a field's template.
pub fn format_field_prompt(field: FieldKind, text: &str) -> String {
    template(field).replace("{text}", text)
}
