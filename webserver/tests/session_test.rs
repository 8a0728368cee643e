//! Live homepage sessions under paused tokio time

mod common;

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use shared::{Location, SessionId};
use webserver::core::EXIT_TRANSITION;
use webserver::web::HomepageSession;
use webserver::{BrowserMessage, ClientMessage, SessionEvent, WebServerResult};

use common::fixtures::create_test_props;
use common::helpers::{count, next_message, next_render};

const PROMPT: Duration = Duration::from_millis(100);

struct Harness {
    events: mpsc::Sender<SessionEvent>,
    outgoing: mpsc::Receiver<ClientMessage>,
    task: JoinHandle<WebServerResult<()>>,
}

impl Harness {
    fn start(href: &str) -> Self {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (out_tx, out_rx) = mpsc::channel(16);
        let session = HomepageSession::new(
            SessionId::new(),
            &Location::parse(href),
            create_test_props(),
            &event_tx,
            event_rx,
            out_tx,
        );
        Self {
            events: event_tx,
            outgoing: out_rx,
            task: tokio::spawn(session.run()),
        }
    }

    async fn send(&self, message: BrowserMessage) {
        self.events.send(SessionEvent::Browser(message)).await.unwrap();
    }

    async fn submit(&self, text: &str) {
        self.send(BrowserMessage::Submit { text: text.to_string() }).await;
    }

    async fn navigate(&self, search: &str) {
        self.send(BrowserMessage::Navigate { search: search.to_string() }).await;
    }

    async fn assert_quiet(&mut self, within: Duration) {
        let next = tokio::time::timeout(within, self.outgoing.recv()).await;
        assert!(next.is_err(), "unexpected message: {next:?}");
    }

    async fn finish(self) {
        drop(self.events);
        self.task.await.unwrap().unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_initial_render_follows_url() {
    let mut intro = Harness::start("/");
    let doc = next_render(&mut intro.outgoing, PROMPT).await;
    assert_eq!(count(&doc, ".intro"), 1);
    assert_eq!(count(&doc, ".search-results"), 0);
    intro.finish().await;

    let mut results = Harness::start("/?q=ottawa");
    let doc = next_render(&mut results.outgoing, PROMPT).await;
    assert_eq!(count(&doc, ".intro"), 0);
    assert_eq!(count(&doc, ".search-results"), 1);
    results.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_submit_navigates_then_slides_intro_away() {
    let mut session = Harness::start("/");
    next_render(&mut session.outgoing, PROMPT).await;

    session.submit("bakery").await;
    let submitted_at = Instant::now();

    match next_message(&mut session.outgoing, PROMPT).await {
        ClientMessage::Navigate { pathname, query, href } => {
            assert_eq!(pathname, "/");
            assert_eq!(query.search_text(), Some("bakery"));
            assert_eq!(href, "/?q=bakery");
        }
        other => panic!("expected navigate, got {other:?}"),
    }

    let doc = next_render(&mut session.outgoing, PROMPT).await;
    assert_eq!(count(&doc, ".intro.slide-up"), 1);
    assert_eq!(count(&doc, ".search-results"), 1);

    let doc = next_render(&mut session.outgoing, EXIT_TRANSITION * 2).await;
    assert!(submitted_at.elapsed() >= EXIT_TRANSITION);
    assert_eq!(count(&doc, ".intro"), 0);
    assert_eq!(count(&doc, ".search-results"), 1);

    session.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_leaving_keeps_one_timer() {
    let mut session = Harness::start("/");
    next_render(&mut session.outgoing, PROMPT).await;

    session.submit("bakery").await;
    next_message(&mut session.outgoing, PROMPT).await;
    next_render(&mut session.outgoing, PROMPT).await;

    tokio::time::sleep(EXIT_TRANSITION / 2).await;
    session.submit("bikes").await;
    next_message(&mut session.outgoing, PROMPT).await;
    let doc = next_render(&mut session.outgoing, PROMPT).await;
    assert_eq!(count(&doc, ".intro.slide-up"), 1);

    // Removal stays on the first deadline
    let doc = next_render(&mut session.outgoing, EXIT_TRANSITION).await;
    assert_eq!(count(&doc, ".intro"), 0);
    session.assert_quiet(EXIT_TRANSITION * 2).await;

    session.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_history_back_to_bare_url_restores_intro() {
    let mut session = Harness::start("/?q=ottawa");
    next_render(&mut session.outgoing, PROMPT).await;

    session.navigate("").await;
    let doc = next_render(&mut session.outgoing, PROMPT).await;
    assert_eq!(count(&doc, ".intro"), 1);
    assert_eq!(count(&doc, ".intro.slide-up"), 0);
    assert_eq!(count(&doc, ".powered-by"), 1);
    assert_eq!(count(&doc, ".search-results"), 0);

    session.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_non_empty_history_navigation_sends_nothing() {
    let mut session = Harness::start("/");
    next_render(&mut session.outgoing, PROMPT).await;

    session.navigate("?q=bakery").await;
    session.assert_quiet(PROMPT).await;

    session.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_returning_to_intro_cancels_pending_removal() {
    let mut session = Harness::start("/");
    next_render(&mut session.outgoing, PROMPT).await;

    session.submit("bakery").await;
    next_message(&mut session.outgoing, PROMPT).await;
    next_render(&mut session.outgoing, PROMPT).await;

    session.navigate("").await;
    let doc = next_render(&mut session.outgoing, PROMPT).await;
    assert_eq!(count(&doc, ".intro"), 1);
    assert_eq!(count(&doc, ".intro.slide-up"), 0);

    session.assert_quiet(EXIT_TRANSITION * 2).await;
    session.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_session_ends_when_events_close_mid_transition() {
    let mut session = Harness::start("/");
    next_render(&mut session.outgoing, PROMPT).await;
    session.submit("bakery").await;
    next_message(&mut session.outgoing, PROMPT).await;
    next_render(&mut session.outgoing, PROMPT).await;

    // The pending timer only holds a weak sender
    session.finish().await;
}

#[tokio::test(start_paused = true)]
async fn test_every_submit_navigates_on_a_tight_outgoing_channel() {
    let (event_tx, event_rx) = mpsc::channel(16);
    let (out_tx, mut out_rx) = mpsc::channel(1);
    let session = HomepageSession::new(
        SessionId::new(),
        &Location::parse("/"),
        create_test_props(),
        &event_tx,
        event_rx,
        out_tx,
    );
    let task = tokio::spawn(session.run());
    next_render(&mut out_rx, PROMPT).await;

    let submits = tokio::spawn(async move {
        for i in 0..20 {
            let message = BrowserMessage::Submit { text: format!("term{i}") };
            event_tx.send(SessionEvent::Browser(message)).await.unwrap();
        }
        event_tx
    });

    for i in 0..20 {
        match next_message(&mut out_rx, PROMPT).await {
            ClientMessage::Navigate { href, .. } => assert_eq!(href, format!("/?q=term{i}")),
            other => panic!("expected navigate {i}, got {other:?}"),
        }
        next_render(&mut out_rx, PROMPT).await;
    }

    drop(submits.await.unwrap());
    task.await.unwrap().unwrap();
}
