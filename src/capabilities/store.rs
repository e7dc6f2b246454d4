use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_KEY_LENGTH: usize = 512;

/// Key-value persistence backed by the shell (AsyncStorage, UserDefaults,
/// SharedPreferences). The core only ever uses a single slot, but the
/// capability keeps the key explicit so the shell side stays generic.
#[derive(Clone)]
pub struct Store<Ev> {
    context: CapabilityContext<StoreOperation, Ev>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOperation {
    Get { key: String },
    Set { key: String, value: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOutput {
    Value { bytes: Option<Vec<u8>> },
    Written,
    Failed { message: String },
}

impl Operation for StoreOperation {
    type Output = StoreOutput;
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreError {
    #[error("invalid storage key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },
    #[error("storage failure: {message}")]
    Io { message: String },
    #[error("shell returned a response of the wrong kind")]
    Protocol,
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "key cannot be empty".to_string(),
        });
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(StoreError::InvalidKey {
            key: key.chars().take(50).collect::<String>() + "...",
            reason: format!("key exceeds maximum length of {MAX_KEY_LENGTH} bytes"),
        });
    }

    if key.chars().any(char::is_control) {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "key contains control characters".to_string(),
        });
    }

    Ok(())
}

impl<Ev> Store<Ev>
where
    Ev: 'static,
{
    #[must_use]
    pub fn new(context: CapabilityContext<StoreOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn get<F>(&self, key: impl Into<String>, make_event: F)
    where
        F: FnOnce(Result<Option<Vec<u8>>, StoreError>) -> Ev + Send + 'static,
    {
        let context = self.context.clone();
        let key = key.into();
        self.context.spawn(async move {
            let result = match validate_key(&key) {
                Ok(()) => match context.request_from_shell(StoreOperation::Get { key }).await {
                    StoreOutput::Value { bytes } => Ok(bytes),
                    StoreOutput::Failed { message } => Err(StoreError::Io { message }),
                    StoreOutput::Written => Err(StoreError::Protocol),
                },
                Err(e) => Err(e),
            };
            context.update_app(make_event(result));
        });
    }

    pub fn set<F>(&self, key: impl Into<String>, value: Vec<u8>, make_event: F)
    where
        F: FnOnce(Result<(), StoreError>) -> Ev + Send + 'static,
    {
        let context = self.context.clone();
        let key = key.into();
        self.context.spawn(async move {
            let result = match validate_key(&key) {
                Ok(()) => {
                    match context
                        .request_from_shell(StoreOperation::Set { key, value })
                        .await
                    {
                        StoreOutput::Written => Ok(()),
                        StoreOutput::Failed { message } => Err(StoreError::Io { message }),
                        StoreOutput::Value { .. } => Err(StoreError::Protocol),
                    }
                }
                Err(e) => Err(e),
            };
            context.update_app(make_event(result));
        });
    }
}

impl<Ev> Capability<Ev> for Store<Ev> {
    type Operation = StoreOperation;
    type MappedSelf<MappedEv> = Store<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Store::new(self.context.map_event(f))
    }
}
