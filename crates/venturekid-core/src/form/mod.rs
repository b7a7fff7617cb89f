//! Lead-capture wizard subsystem: field values, flow definitions, the
//! step validator, and the session state machine.

pub mod controller;
pub mod fields;
pub mod flow;
pub mod validator;

pub use controller::{FormSession, Stage};
pub use fields::{ErrorMap, FieldMap, FieldValue};
pub use flow::{FieldRule, FlowKind, FormFlow, RuleKind, StepDef};
