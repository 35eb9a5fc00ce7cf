use quiz_core::format_elapsed;

/// Live clock label, e.g. `"Time: 1 min 5 sec"`.
#[must_use]
pub fn timer_label(elapsed_secs: u64) -> String {
    format!("Time: {}", format_elapsed(elapsed_secs))
}

#[must_use]
pub fn time_taken_label(elapsed_secs: u64) -> String {
    format!("You took {} to solve this question.", format_elapsed(elapsed_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_wrap_formatted_duration() {
        assert_eq!(timer_label(0), "Time: 0 sec");
        assert_eq!(timer_label(3661), "Time: 1 hr 1 min 1 sec");
        assert_eq!(
            time_taken_label(65),
            "You took 1 min 5 sec to solve this question."
        );
    }
}
