// Sign-up onboarding wizard: five linear steps from account creation to the
// dashboard redirect. Transitions live in `machine`, collaborator-backed steps
// in `flow`.

pub mod flow;
pub mod handlers;
pub mod machine;
pub mod models;
pub mod resume;
