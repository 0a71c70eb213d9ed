//! Applying a settled request to the page.

use repodash_domain::{Feedback, StructuredResponse, SubmissionError, SubmitOutcome, TransportError};

use crate::ports::outbound::{FeedbackPort, NavigationPort};

/// Navigate or show a banner for one settled request.
///
/// `still_pending` is true when another request on the same surface has not
/// settled yet: its indicator stays up, and a banner shown now replaces any
/// banner an earlier request left, so the surface never accumulates them.
///
/// `Ok` is either `Redirect` (navigation already requested) or `NoAction`;
/// every failure, including a refused navigation, has been rendered as a
/// transient banner before it is returned.
pub fn apply_outcome(
    feedback: &dyn FeedbackPort,
    navigation: &dyn NavigationPort,
    result: Result<StructuredResponse, TransportError>,
    still_pending: bool,
) -> Result<SubmitOutcome, SubmissionError> {
    if !still_pending {
        feedback.remove_indicator();
    }

    let outcome = SubmitOutcome::from_result(result).and_then(|outcome| {
        if let SubmitOutcome::Redirect(url) = &outcome {
            tracing::debug!(url = %url, "Redirecting after submission");
            navigation
                .navigate(url)
                .map_err(|e| SubmissionError::navigation(format!("{e:#}")))?;
        }
        Ok(outcome)
    });

    if let Err(e) = &outcome {
        if e.is_application() {
            tracing::debug!(error = %e, "Server rejected submission");
        } else {
            tracing::warn!(error = %e, "Request failed");
        }
        feedback.clear_transient();
        if still_pending {
            feedback.show(Feedback::Indicator);
        }
        feedback.show(Feedback::alert(e.banner_text()));
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockFeedbackPort, MockNavigationPort};
    use mockall::predicate::*;
    use mockall::Sequence;

    #[test]
    fn redirect_navigates_without_banner() {
        let mut feedback = MockFeedbackPort::new();
        let mut navigation = MockNavigationPort::new();
        feedback.expect_remove_indicator().times(1).return_const(());
        feedback.expect_show().never();
        navigation
            .expect_navigate()
            .with(eq("/repos/5"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = apply_outcome(
            &feedback,
            &navigation,
            Ok(StructuredResponse::redirect("/repos/5")),
            false,
        );

        assert_eq!(outcome, Ok(SubmitOutcome::Redirect("/repos/5".into())));
    }

    #[test]
    fn transport_error_is_rendered() {
        let mut feedback = MockFeedbackPort::new();
        let mut navigation = MockNavigationPort::new();
        feedback.expect_remove_indicator().times(1).return_const(());
        feedback.expect_clear_transient().times(1).return_const(());
        feedback
            .expect_show()
            .with(eq(Feedback::alert("500: Internal Server Error")))
            .times(1)
            .return_const(());
        navigation.expect_navigate().never();

        let outcome = apply_outcome(
            &feedback,
            &navigation,
            Err(TransportError::status(500, "Internal Server Error")),
            false,
        );

        assert!(matches!(outcome, Err(SubmissionError::Transport(_))));
    }

    #[test]
    fn empty_response_does_nothing_visible() {
        let mut feedback = MockFeedbackPort::new();
        let mut navigation = MockNavigationPort::new();
        feedback.expect_remove_indicator().times(1).return_const(());
        feedback.expect_show().never();
        navigation.expect_navigate().never();

        let outcome = apply_outcome(
            &feedback,
            &navigation,
            Ok(StructuredResponse::default()),
            false,
        );

        assert_eq!(outcome, Ok(SubmitOutcome::NoAction));
    }

    #[test]
    fn refused_navigation_becomes_a_banner() {
        let mut feedback = MockFeedbackPort::new();
        let mut navigation = MockNavigationPort::new();
        feedback.expect_remove_indicator().times(1).return_const(());
        feedback.expect_clear_transient().times(1).return_const(());
        feedback
            .expect_show()
            .withf(|f| matches!(f.text(), Some(t) if t.starts_with("navigation failed")))
            .times(1)
            .return_const(());
        navigation
            .expect_navigate()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("SecurityError")));

        let outcome = apply_outcome(
            &feedback,
            &navigation,
            Ok(StructuredResponse::redirect("/repos/5")),
            false,
        );

        assert_eq!(outcome, Err(SubmissionError::navigation("SecurityError")));
    }

    #[test]
    fn banner_while_another_request_is_pending_keeps_the_indicator() {
        let mut feedback = MockFeedbackPort::new();
        let navigation = MockNavigationPort::new();
        let mut seq = Sequence::new();
        feedback.expect_remove_indicator().never();
        feedback
            .expect_clear_transient()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        feedback
            .expect_show()
            .with(eq(Feedback::Indicator))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        feedback
            .expect_show()
            .with(eq(Feedback::alert("Name already taken")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let outcome = apply_outcome(
            &feedback,
            &navigation,
            Ok(StructuredResponse::failure("Name already taken")),
            true,
        );

        assert!(outcome.is_err());
    }
}
