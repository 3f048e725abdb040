// Copyright (c) 2024-2025 The OrbitX Developers

//! Scripted provider, host and relay driver.
//!
//! Defaults are the happy path: an authenticated identity with no
//! wallets, creations that succeed, a shell with every channel.
//! Builders flip individual behaviors for failure scenarios.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use orbitx_bridge::{
    host::{Host, HostError},
    provider::{Identity, LinkedAccount, ProviderError, TransactionRequest, WalletProvider},
};
use orbitx_bridge_core::{Driver, Error as RelayError};
use orbitx_bridge_deeplink::{chain::ChainFamily, message::WalletMessage};

/// Address reported by default EVM wallet creation
pub const CREATED_EVM_ADDRESS: &str = "0x9fE46736679d2D9a65F0992F2272dE9f3C7Fa6e0";
/// Address reported by default Solana wallet creation
pub const CREATED_SOLANA_ADDRESS: &str = "9AhKqLR67hwapvG8SA2JFXaCshXc9nALJjpKaHZrsbkw";
/// Address reported by default Tron wallet creation
pub const CREATED_TRON_ADDRESS: &str = "TXYZoPYRdj2D9XRtbG411XZZ3kM5VkAeBf";

/// Scripted outcome for a wallet creation call
#[derive(Clone, Debug)]
pub enum Creation {
    /// Creation succeeds with this raw record
    Ok(Value),
    /// Creation fails with this message
    Fail(&'static str),
}

fn default_creation(chain: ChainFamily) -> Value {
    match chain {
        ChainFamily::Evm => json!({ "address": CREATED_EVM_ADDRESS, "id": "created-evm" }),
        ChainFamily::Solana => json!({ "address": CREATED_SOLANA_ADDRESS, "id": "created-solana" }),
        ChainFamily::Tron => json!({ "address": CREATED_TRON_ADDRESS, "id": "created-tron" }),
    }
}

/// Scripted wallet provider
pub struct MockProvider {
    account: Identity,
    identity: Mutex<Option<Identity>>,
    wallets: Mutex<HashMap<ChainFamily, Vec<Value>>>,
    creations: HashMap<ChainFamily, Creation>,
    created: Mutex<Vec<ChainFamily>>,
    failing: Option<String>,
}

impl MockProvider {
    /// Authenticated provider with no wallets
    pub fn new(user_id: &str) -> Self {
        let account = Identity {
            user_id: user_id.to_string(),
            linked_accounts: vec![],
        };
        Self {
            identity: Mutex::new(Some(account.clone())),
            account,
            wallets: Mutex::new(HashMap::new()),
            creations: HashMap::new(),
            created: Mutex::new(vec![]),
            failing: None,
        }
    }

    /// Provider with no authenticated user
    pub fn logged_out() -> Self {
        let p = Self::new("");
        *p.identity.lock().unwrap() = None;
        p
    }

    /// Add an existing wallet record for a chain family
    pub fn with_wallet(self, chain: ChainFamily, record: Value) -> Self {
        self.wallets.lock().unwrap().entry(chain).or_default().push(record);
        self
    }

    /// Add a linked account to the identity
    pub fn with_linked_account(mut self, account: LinkedAccount) -> Self {
        self.account.linked_accounts.push(account.clone());
        self.identity
            .lock()
            .unwrap()
            .as_mut()
            .expect("no identity to link to")
            .linked_accounts
            .push(account);
        self
    }

    /// Script the creation outcome for a chain family
    pub fn with_creation(mut self, chain: ChainFamily, creation: Creation) -> Self {
        self.creations.insert(chain, creation);
        self
    }

    /// Make every signing and transaction call fail
    pub fn failing_signing(mut self, message: &str) -> Self {
        self.failing = Some(message.to_string());
        self
    }

    /// Chains created so far, in call order
    pub fn created(&self) -> Vec<ChainFamily> {
        self.created.lock().unwrap().clone()
    }

    fn check_signing(&self) -> Result<(), ProviderError> {
        match &self.failing {
            Some(msg) => Err(ProviderError::Signing(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn identity(&self) -> Result<Option<Identity>, ProviderError> {
        Ok(self.identity.lock().unwrap().clone())
    }

    async fn login(&self) -> Result<Identity, ProviderError> {
        if self.account.user_id.is_empty() {
            return Err(ProviderError::NotAuthenticated);
        }
        *self.identity.lock().unwrap() = Some(self.account.clone());
        Ok(self.account.clone())
    }

    async fn signup(&self) -> Result<Identity, ProviderError> {
        self.login().await
    }

    async fn wallets(&self, chain: ChainFamily) -> Result<Vec<Value>, ProviderError> {
        Ok(self
            .wallets
            .lock()
            .unwrap()
            .get(&chain)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_wallet(&self, chain: ChainFamily) -> Result<Value, ProviderError> {
        let record = match self.creations.get(&chain) {
            Some(Creation::Fail(msg)) => return Err(ProviderError::Creation(msg.to_string())),
            Some(Creation::Ok(v)) => v.clone(),
            None => default_creation(chain),
        };

        self.created.lock().unwrap().push(chain);
        self.wallets
            .lock()
            .unwrap()
            .entry(chain)
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn sign_message(
        &self,
        chain: ChainFamily,
        address: &str,
        message: &str,
    ) -> Result<String, ProviderError> {
        self.check_signing()?;
        Ok(format!("sig:{chain}:{address}:{}", message.len()))
    }

    async fn sign_raw_hash(
        &self,
        chain: ChainFamily,
        address: &str,
        hash: &str,
    ) -> Result<String, ProviderError> {
        self.check_signing()?;
        Ok(format!("raw:{chain}:{address}:{hash}"))
    }

    async fn send_transaction(
        &self,
        chain: ChainFamily,
        address: &str,
        req: &TransactionRequest,
    ) -> Result<String, ProviderError> {
        self.check_signing()?;
        Ok(format!("tx:{chain}:{address}:{}", req.to))
    }

    async fn export_wallet(&self, _chain: ChainFamily, _address: &str) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn logout(&self) -> Result<(), ProviderError> {
        *self.identity.lock().unwrap() = None;
        Ok(())
    }
}

/// One recorded host delivery
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    /// Posted message envelope
    Message(WalletMessage),
    /// Storage write
    Storage {
        key: String,
        value: String,
    },
    /// Page navigation
    Navigation(String),
}

/// Recording host shell
pub struct MockHost {
    channel: bool,
    message_fails: bool,
    storage_fails: bool,
    navigation_fails: bool,
    deliveries: Mutex<Vec<Delivery>>,
}

impl MockHost {
    /// Shell with every channel working
    pub fn new() -> Self {
        Self {
            channel: true,
            message_fails: false,
            storage_fails: false,
            navigation_fails: false,
            deliveries: Mutex::new(vec![]),
        }
    }

    /// Shell without an in-process message channel
    pub fn without_channel() -> Self {
        Self {
            channel: false,
            ..Self::new()
        }
    }

    /// Make message posts fail
    pub fn failing_messages(mut self) -> Self {
        self.message_fails = true;
        self
    }

    /// Make storage writes fail
    pub fn failing_storage(mut self) -> Self {
        self.storage_fails = true;
        self
    }

    /// Make navigations fail
    pub fn failing_navigation(mut self) -> Self {
        self.navigation_fails = true;
        self
    }

    /// Everything delivered so far, in order
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    /// URLs navigated to so far
    pub fn navigations(&self) -> Vec<String> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Navigation(url) => Some(url),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MockHost {
    fn message_channel_available(&self) -> bool {
        self.channel
    }

    fn post_message(&self, message: &WalletMessage) -> Result<(), HostError> {
        if !self.channel {
            return Err(HostError::Unavailable);
        }
        if self.message_fails {
            return Err(HostError::Failed("scripted message failure".to_string()));
        }
        self.deliveries
            .lock()
            .unwrap()
            .push(Delivery::Message(message.clone()));
        Ok(())
    }

    fn storage_put(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.storage_fails {
            return Err(HostError::Failed("scripted storage failure".to_string()));
        }
        self.deliveries.lock().unwrap().push(Delivery::Storage {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<(), HostError> {
        if self.navigation_fails {
            return Err(HostError::Failed("scripted navigation failure".to_string()));
        }
        self.deliveries
            .lock()
            .unwrap()
            .push(Delivery::Navigation(url.to_string()));
        Ok(())
    }
}

/// Recording relay driver with scriptable failures
#[derive(Default)]
pub struct MockDriver {
    /// Frame navigations accepted
    pub frame: Vec<String>,
    /// Location navigations accepted
    pub location: Vec<String>,
    /// Reject frame navigation
    pub frame_fails: bool,
    /// Reject location navigation
    pub location_fails: bool,
}

impl MockDriver {
    /// Driver accepting both mechanisms
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver whose frame mechanism fails
    pub fn failing_frame() -> Self {
        Self {
            frame_fails: true,
            ..Self::default()
        }
    }

    /// Driver with no working mechanism
    pub fn failing_both() -> Self {
        Self {
            frame_fails: true,
            location_fails: true,
            ..Self::default()
        }
    }
}

impl Driver for MockDriver {
    fn navigate_frame(&mut self, target: &str) -> Result<(), RelayError> {
        if self.frame_fails {
            return Err(RelayError::Unavailable);
        }
        self.frame.push(target.to_string());
        Ok(())
    }

    fn navigate_location(&mut self, target: &str) -> Result<(), RelayError> {
        if self.location_fails {
            return Err(RelayError::Unavailable);
        }
        self.location.push(target.to_string());
        Ok(())
    }
}
