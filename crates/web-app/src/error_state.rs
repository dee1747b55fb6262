use crate::{HOME_PATH, Navigator};

/// Configuration of a terminal error screen: one icon, one heading, one
/// explanatory message and a single recovery action.
///
/// All fields are static literals. A screen built from this value must
/// never fail to render, as it is itself the error-handling UI for
/// upstream failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStateConfig {
    pub icon: &'static str,
    pub heading: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
    pub action_target: &'static str,
}

impl ErrorStateConfig {
    /// Issues the recovery navigation. One navigation request per call;
    /// repeated activations issue repeated requests.
    pub fn activate(&self, navigator: &impl Navigator) {
        navigator.navigate_to(self.action_target);
    }
}

pub const NOT_FOUND: ErrorStateConfig = ErrorStateConfig {
    icon: "file-circle-question",
    heading: "Page not found",
    message: "Sorry, we couldn't find the page you're looking for. \
              It might have been moved or deleted.",
    action_label: "Back to home",
    action_target: HOME_PATH,
};

pub const UNAUTHORIZED: ErrorStateConfig = ErrorStateConfig {
    icon: "lock",
    heading: "Unauthorized Access",
    message: "Sorry, you don't have permission to access this page. \
              Please log in or contact an administrator for assistance.",
    action_label: "Back to home",
    action_target: HOME_PATH,
};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Default)]
    struct FakeNavigator {
        requests: RefCell<Vec<String>>,
    }

    impl Navigator for FakeNavigator {
        fn navigate_to(&self, path: &str) {
            self.requests.borrow_mut().push(path.to_string());
        }
    }

    #[rstest]
    #[case(NOT_FOUND, "Page not found")]
    #[case(UNAUTHORIZED, "Unauthorized Access")]
    fn test_heading(#[case] config: ErrorStateConfig, #[case] heading: &str) {
        assert_eq!(config.heading, heading);
    }

    #[rstest]
    #[case(NOT_FOUND)]
    #[case(UNAUTHORIZED)]
    fn test_action_label(#[case] config: ErrorStateConfig) {
        assert_eq!(config.action_label, "Back to home");
    }

    #[rstest]
    #[case(NOT_FOUND)]
    #[case(UNAUTHORIZED)]
    fn test_action_targets_home(#[case] config: ErrorStateConfig) {
        assert_eq!(config.action_target, HOME_PATH);
    }

    #[rstest]
    #[case(NOT_FOUND)]
    #[case(UNAUTHORIZED)]
    fn test_activation_navigates_home_once(#[case] config: ErrorStateConfig) {
        let navigator = FakeNavigator::default();

        config.activate(&navigator);

        assert_eq!(*navigator.requests.borrow(), vec![HOME_PATH.to_string()]);
    }

    #[test]
    fn test_repeated_activation_is_not_deduplicated() {
        let navigator = FakeNavigator::default();

        NOT_FOUND.activate(&navigator);
        NOT_FOUND.activate(&navigator);

        assert_eq!(
            *navigator.requests.borrow(),
            vec![HOME_PATH.to_string(), HOME_PATH.to_string()]
        );
    }
}
