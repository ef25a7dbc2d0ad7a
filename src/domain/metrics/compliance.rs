//! Section compliance - share of a section's questions answered "yes".

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::Section;
use crate::domain::foundation::Percentage;

/// Returns the number of questions in the section answered "yes".
pub fn yes_count(section: &Section, responses: &ResponseSet) -> usize {
    section
        .questions
        .iter()
        .filter(|q| {
            responses
                .get(&q.id)
                .map(|v| v.is_affirmative())
                .unwrap_or(false)
        })
        .count()
}

/// Returns the compliance percentage for a section.
///
/// `no`, `unsure` and unanswered questions all count against compliance;
/// only `yes` counts toward it. The zero-question case reports 0 rather
/// than a division artifact (unreachable with a validated catalog).
pub fn section_compliance(section: &Section, responses: &ResponseSet) -> Percentage {
    Percentage::from_ratio(yes_count(section, responses), section.question_count())
}
