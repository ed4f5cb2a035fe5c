//! Payment wizard state machine.
//!
//! UI-layer session state only: the composer stays stateless, and nothing is
//! persisted until the user fires the final payment submission. Abandoning
//! the wizard at any step leaves no durable side effect.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Steps of the manual WhatsApp payment wizard, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFlow {
    #[default]
    AwaitingContact,
    AwaitingPayment,
    AwaitingProof,
    Complete,
}

/// User actions that advance the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowEvent {
    ContactShared,
    PaymentSent,
    ProofUploaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event {event:?} is not valid in state {state:?}")]
pub struct InvalidTransition {
    pub state: PaymentFlow,
    pub event: FlowEvent,
}

impl PaymentFlow {
    /// Apply one wizard event. Only the in-order transition is legal; proof
    /// upload is required before completion.
    pub fn apply(self, event: FlowEvent) -> Result<Self, InvalidTransition> {
        match (self, event) {
            (PaymentFlow::AwaitingContact, FlowEvent::ContactShared) => {
                Ok(PaymentFlow::AwaitingPayment)
            }
            (PaymentFlow::AwaitingPayment, FlowEvent::PaymentSent) => {
                Ok(PaymentFlow::AwaitingProof)
            }
            (PaymentFlow::AwaitingProof, FlowEvent::ProofUploaded) => Ok(PaymentFlow::Complete),
            (state, event) => Err(InvalidTransition { state, event }),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == PaymentFlow::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_walks_every_step() {
        let flow = PaymentFlow::default();
        let flow = flow.apply(FlowEvent::ContactShared).unwrap();
        assert_eq!(flow, PaymentFlow::AwaitingPayment);
        let flow = flow.apply(FlowEvent::PaymentSent).unwrap();
        assert_eq!(flow, PaymentFlow::AwaitingProof);
        let flow = flow.apply(FlowEvent::ProofUploaded).unwrap();
        assert!(flow.is_terminal());
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let err = PaymentFlow::AwaitingContact
            .apply(FlowEvent::ProofUploaded)
            .unwrap_err();
        assert_eq!(err.state, PaymentFlow::AwaitingContact);

        assert!(PaymentFlow::AwaitingPayment
            .apply(FlowEvent::ContactShared)
            .is_err());
    }

    #[test]
    fn complete_is_terminal() {
        for event in [
            FlowEvent::ContactShared,
            FlowEvent::PaymentSent,
            FlowEvent::ProofUploaded,
        ] {
            assert!(PaymentFlow::Complete.apply(event).is_err());
        }
    }

    #[test]
    fn states_serialize_snake_case() {
        let json = serde_json::to_string(&PaymentFlow::AwaitingProof).unwrap();
        assert_eq!(json, "\"awaiting_proof\"");
    }
}
