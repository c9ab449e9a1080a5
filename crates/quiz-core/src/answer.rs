use crate::countries::Country;

/// Case-fold an answer for comparison. Whitespace is kept as typed.
#[inline]
pub fn normalize(answer: &str) -> String {
    answer.to_lowercase()
}

/// True when `answer` equals the country's name or one of its alternative
/// names, ignoring case.
pub fn is_correct(country: &Country, answer: &str) -> bool {
    let answer = normalize(answer);
    std::iter::once(country.name)
        .chain(country.alternative_names.iter().copied())
        .any(|name| normalize(name) == answer)
}

/// Outcome of a submitted answer.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub answer: String,
    pub country_index: usize,
    pub country_name: &'static str,
}

impl Verdict {
    pub fn judge(country_index: usize, country: &'static Country, answer: &str) -> Self {
        Self {
            correct: is_correct(country, answer),
            answer: answer.to_string(),
            country_index,
            country_name: country.name,
        }
    }
}
