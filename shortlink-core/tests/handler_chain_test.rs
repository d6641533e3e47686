//! Integration tests for [`shortlink_core::HandlerChain`].
//!
//! Covers: handler before/after order, a before returning false stopping the chain, Stop
//! ending the handle phase, and multiple handlers executed in order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::sync::Mutex;

use chrono::Utc;
use shortlink_core::{
    Chat, Handler, HandlerChain, HandlerResponse, Message, MessageDirection, User,
};

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// Counts how many times each phase ran, and records the order of events.
struct CountingHandler {
    name: &'static str,
    response: HandlerResponse,
    handle_count: Arc<AtomicUsize>,
    events: Arc<Mutex<Vec<String>>>,
}

impl CountingHandler {
    fn new(
        name: &'static str,
        response: HandlerResponse,
        events: Arc<Mutex<Vec<String>>>,
    ) -> (Arc<Self>, Arc<AtomicUsize>) {
        let handle_count = Arc::new(AtomicUsize::new(0));
        (
            Arc::new(Self {
                name,
                response,
                handle_count: handle_count.clone(),
                events,
            }),
            handle_count,
        )
    }

    fn push(&self, phase: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, phase));
    }
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn before(&self, _message: &Message) -> shortlink_core::Result<bool> {
        self.push("before");
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> shortlink_core::Result<HandlerResponse> {
        self.push("handle");
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> shortlink_core::Result<()> {
        self.push("after");
        Ok(())
    }
}

#[tokio::test]
async fn all_phases_run_in_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let (first, first_count) =
        CountingHandler::new("first", HandlerResponse::Continue, events.clone());
    let (second, second_count) =
        CountingHandler::new("second", HandlerResponse::Continue, events.clone());

    let chain = HandlerChain::new().add_handler(first).add_handler(second);
    let response = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 1);

    // before first→last, handle first→last, after last→first.
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "first:before",
            "second:before",
            "first:handle",
            "second:handle",
            "second:after",
            "first:after",
        ]
    );
}

#[tokio::test]
async fn stop_ends_the_handle_phase() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let (stopper, stopper_count) =
        CountingHandler::new("stopper", HandlerResponse::Stop, events.clone());
    let (never, never_count) =
        CountingHandler::new("never", HandlerResponse::Continue, events.clone());

    let chain = HandlerChain::new().add_handler(stopper).add_handler(never);
    let response = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(stopper_count.load(Ordering::SeqCst), 1);
    assert_eq!(never_count.load(Ordering::SeqCst), 0);

    // after still runs for every handler, in reverse.
    let events = events.lock().unwrap();
    assert!(events.contains(&"never:after".to_string()));
    assert!(events.contains(&"stopper:after".to_string()));
}

#[tokio::test]
async fn before_returning_false_stops_the_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> shortlink_core::Result<bool> {
            Ok(false)
        }
    }

    let events = Arc::new(Mutex::new(Vec::new()));
    let (handler, handle_count) =
        CountingHandler::new("handler", HandlerResponse::Continue, events);

    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(handler);
    let response = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_chain_continues() {
    let chain = HandlerChain::new();
    let response = chain.handle(&create_test_message("test")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
