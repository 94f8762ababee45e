use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepError {
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(char),
}
