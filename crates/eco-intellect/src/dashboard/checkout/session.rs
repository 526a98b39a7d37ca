use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    #[default]
    Closed,
    Initial,
    Processing,
    Intercept,
    Success,
}

impl CheckoutState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Initial => "Order Review",
            Self::Processing => "Processing Payment",
            Self::Intercept => "Eco Suggestion",
            Self::Success => "Order Confirmed",
        }
    }

    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// The two exits from the intercept screen. Both confirm the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptChoice {
    AcceptEcoAlternative,
    KeepOriginal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    Open,
    Pay,
    /// Fired by the simulated payment delay, never by the user.
    ProcessingElapsed,
    Choose(InterceptChoice),
    ReturnToDashboard,
    Close,
}

/// Result of feeding one action to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied {
        from: CheckoutState,
        to: CheckoutState,
    },
    /// The action has no meaning in the current state and changed nothing.
    Ignored { state: CheckoutState },
}

impl Transition {
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// State after the action.
    pub const fn state(self) -> CheckoutState {
        match self {
            Self::Applied { to, .. } => to,
            Self::Ignored { state } => state,
        }
    }
}

/// Ephemeral checkout modal state.
///
/// Every path back to `Closed` resets the whole session, so reopening always
/// starts from `Initial` with nothing carried over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckoutSession {
    state: CheckoutState,
    choice: Option<InterceptChoice>,
}

impl CheckoutSession {
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_processing(&self) -> bool {
        self.state == CheckoutState::Processing
    }

    /// Intercept exit taken in this session; presentation only.
    pub fn choice(&self) -> Option<InterceptChoice> {
        self.choice
    }

    pub fn apply(&mut self, action: CheckoutAction) -> Transition {
        use CheckoutAction as A;
        use CheckoutState as S;

        let from = self.state;
        let to = match (from, action) {
            (S::Closed, A::Open) => S::Initial,
            (S::Initial, A::Pay) => S::Processing,
            (S::Processing, A::ProcessingElapsed) => S::Intercept,
            (S::Intercept, A::Choose(choice)) => {
                self.choice = Some(choice);
                S::Success
            }
            (S::Success, A::ReturnToDashboard) => S::Closed,
            (S::Initial | S::Processing | S::Intercept | S::Success, A::Close) => S::Closed,
            _ => return Transition::Ignored { state: from },
        };

        if to == S::Closed {
            *self = Self::default();
        } else {
            self.state = to;
        }

        Transition::Applied { from, to }
    }
}
