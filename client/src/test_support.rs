//! Scripted collaborators shared by unit tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::channel::oneshot;
use parking_lot::Mutex;

use crate::net::backend::{AdminBackend, IdentityBackend, IdentityListener, IdentityPlatform};
use crate::net::error::ApiError;
use crate::net::types::{Credentials, IdentityRecord, LoginPortal};
use crate::state::session::Principal;
use crate::util::listeners::{ListenerSet, Subscription};

type LoginReply = Result<IdentityRecord, ApiError>;

pub(crate) fn record(uid: &str, role: &str, token: Option<&str>) -> IdentityRecord {
    IdentityRecord {
        uid: uid.to_owned(),
        email: format!("{uid}@example.com"),
        role: Some(role.to_owned()),
        token: token.map(str::to_owned),
    }
}

pub(crate) fn creds() -> Credentials {
    Credentials::from_input("a@b.com", "x").expect("valid credentials")
}

/// Backend whose login replies are queued by the test, in call order.
pub(crate) struct ScriptedBackend {
    logins: Mutex<VecDeque<oneshot::Receiver<LoginReply>>>,
    sign_out_result: Mutex<Result<(), ApiError>>,
    admin_result: Mutex<Result<String, ApiError>>,
    pub login_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    pub admin_calls: AtomicUsize,
    pub last_admin_request: Mutex<Option<(String, String)>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            logins: Mutex::new(VecDeque::new()),
            sign_out_result: Mutex::new(Ok(())),
            admin_result: Mutex::new(Ok("ok".to_owned())),
            login_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
            admin_calls: AtomicUsize::new(0),
            last_admin_request: Mutex::new(None),
        })
    }

    /// Queue a login reply that is available immediately.
    pub(crate) fn queue_login(&self, reply: LoginReply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.logins.lock().push_back(rx);
    }

    /// Queue a login reply the test delivers later through the returned sender.
    pub(crate) fn defer_login(&self) -> oneshot::Sender<LoginReply> {
        let (tx, rx) = oneshot::channel();
        self.logins.lock().push_back(rx);
        tx
    }

    pub(crate) fn fail_sign_out(&self, err: ApiError) {
        *self.sign_out_result.lock() = Err(err);
    }

    pub(crate) fn set_admin_result(&self, result: Result<String, ApiError>) {
        *self.admin_result.lock() = result;
    }

    pub(crate) fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn admin_reply(&self, credential: &str, detail: String) -> Result<String, ApiError> {
        self.admin_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_admin_request.lock() = Some((credential.to_owned(), detail));
        self.admin_result.lock().clone()
    }
}

#[async_trait(?Send)]
impl IdentityBackend for ScriptedBackend {
    async fn login(&self, _portal: LoginPortal, _credentials: &Credentials) -> Result<IdentityRecord, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.logins.lock().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::NetworkUnavailable("reply dropped".to_owned()))),
            None => Err(ApiError::NetworkUnavailable("no scripted reply".to_owned())),
        }
    }

    async fn sign_out(&self, _principal: &Principal) -> Result<(), ApiError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out_result.lock().clone()
    }
}

#[async_trait(?Send)]
impl AdminBackend for ScriptedBackend {
    async fn set_admin_claim(&self, credential: &str, uid: &str) -> Result<String, ApiError> {
        self.admin_reply(credential, format!("claim:{uid}"))
    }

    async fn send_notification(
        &self,
        credential: &str,
        target_uid: &str,
        message: &str,
    ) -> Result<String, ApiError> {
        self.admin_reply(credential, format!("notify:{target_uid}:{message}"))
    }

    async fn fetch_dashboard(&self, credential: &str) -> Result<String, ApiError> {
        self.admin_reply(credential, "dashboard".to_owned())
    }
}

/// Identity platform driven by explicit `push` calls.
pub(crate) struct FakePlatform {
    listeners: ListenerSet<Option<IdentityRecord>>,
    pub subscribe_calls: AtomicUsize,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self { listeners: ListenerSet::new(), subscribe_calls: AtomicUsize::new(0) }
    }

    pub(crate) fn push(&self, record: Option<IdentityRecord>) {
        self.listeners.notify(&record);
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl IdentityPlatform for FakePlatform {
    fn subscribe(&self, listener: IdentityListener) -> Subscription {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        self.listeners.subscribe(move |record: &Option<IdentityRecord>| listener(record.as_ref()))
    }
}
