use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AckError {
    #[error("scheduler acknowledgment was empty")]
    EmptyAcknowledgment,
    #[error("malformed scheduler acknowledgment: {0:?}")]
    MalformedAcknowledgment(String),
}

/// Field holding the job id in the acknowledgment line, e.g.
/// `Your job 12345 ("run1") has been submitted`
const JOB_ID_FIELD: usize = 2;

/// Extract the scheduler-assigned job id from the submission acknowledgment.
///
/// The id is the third whitespace-separated token of the capture's first
/// line, returned verbatim. The acknowledgment format is an external
/// contract, so a missing or short first line is a named error rather than a
/// silently empty id.
pub fn parse_job_id(capture: &str) -> Result<String, AckError> {
    let first_line = capture
        .lines()
        .next()
        .ok_or(AckError::EmptyAcknowledgment)?;
    debug!("Parsing acknowledgment: {first_line}");

    let fields: Vec<&str> = first_line.split_whitespace().collect();
    match fields.get(JOB_ID_FIELD) {
        Some(id) => Ok((*id).to_string()),
        None => Err(AckError::MalformedAcknowledgment(first_line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_the_third_token_of_the_first_line() {
        let capture = "Your job 12345 (\"run1\") has been submitted\n\
                       Job 12345 exited with exit code 0\n";
        assert_eq!(parse_job_id(capture).unwrap(), "12345");
    }

    #[test]
    fn empty_capture_is_a_named_error() {
        assert!(matches!(
            parse_job_id(""),
            Err(AckError::EmptyAcknowledgment)
        ));
    }

    #[test]
    fn short_first_line_is_a_named_error() {
        let err = parse_job_id("qsub: error\n").unwrap_err();
        assert!(matches!(err, AckError::MalformedAcknowledgment(_)));
    }

    #[test]
    fn blank_first_line_is_a_named_error() {
        let err = parse_job_id("\nYour job 12345 ok\n").unwrap_err();
        assert!(matches!(err, AckError::MalformedAcknowledgment(_)));
    }
}
