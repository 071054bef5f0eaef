use std::sync::{Arc, Mutex};

use crate::{
  error::EngineError,
  event::{EventDispatcher, EventKind, EventSubscriber, EventSubscription, ObjectEvent},
  graph_value::GraphValue,
};

struct Recorder {
  label:         &'static str,
  subscriptions: Vec<EventSubscription>,
  seen:          Arc<Mutex<Vec<&'static str>>>,
}

impl EventSubscriber for Recorder {
  fn subscriptions(&self) -> Vec<EventSubscription> {
    self.subscriptions.clone()
  }

  fn on_event(&self, _event: &mut ObjectEvent<'_>) -> Result<(), EngineError> {
    self.seen.lock().expect("seen log").push(self.label);
    Ok(())
  }
}

struct Suffixer;

impl EventSubscriber for Suffixer {
  fn subscriptions(&self) -> Vec<EventSubscription> {
    vec![EventSubscription::new(EventKind::PreSerialize)]
  }

  fn on_event(&self, event: &mut ObjectEvent<'_>) -> Result<(), EngineError> {
    if let GraphValue::Str(text) = event.value_mut() {
      text.push('!');
    }
    Ok(())
  }
}

#[test]
fn dispatches_in_registration_order() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let mut dispatcher = EventDispatcher::new();
  dispatcher.add_subscriber(Arc::new(Recorder {
    label:         "first",
    subscriptions: vec![EventSubscription::new(EventKind::PreSerialize)],
    seen:          seen.clone(),
  }));
  dispatcher.add_subscriber(Arc::new(Recorder {
    label:         "second",
    subscriptions: vec![EventSubscription::new(EventKind::PreSerialize)],
    seen:          seen.clone(),
  }));

  let mut value = GraphValue::Null;
  let mut event = ObjectEvent::new(EventKind::PreSerialize, "test.Point", "json", &mut value);
  dispatcher.dispatch(&mut event).expect("dispatch");
  assert_eq!(*seen.lock().expect("seen log"), vec!["first", "second"]);
}

#[test]
fn type_filters_restrict_delivery() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let mut dispatcher = EventDispatcher::new();
  dispatcher.add_subscriber(Arc::new(Recorder {
    label:         "filtered",
    subscriptions: vec![EventSubscription::for_type(EventKind::PostSerialize, "test.Point")],
    seen:          seen.clone(),
  }));

  let mut value = GraphValue::Null;
  let mut event = ObjectEvent::new(EventKind::PostSerialize, "test.Other", "json", &mut value);
  dispatcher.dispatch(&mut event).expect("dispatch");
  assert!(seen.lock().expect("seen log").is_empty());

  let mut event = ObjectEvent::new(EventKind::PostSerialize, "test.Point", "json", &mut value);
  dispatcher.dispatch(&mut event).expect("dispatch");
  assert_eq!(*seen.lock().expect("seen log"), vec!["filtered"]);
}

#[test]
fn subscribers_may_mutate_the_in_flight_value() {
  let mut dispatcher = EventDispatcher::new();
  dispatcher.add_subscriber(Arc::new(Suffixer));

  let mut value = GraphValue::Str("hello".into());
  let mut event = ObjectEvent::new(EventKind::PreSerialize, "test.Point", "json", &mut value);
  dispatcher.dispatch(&mut event).expect("dispatch");
  assert_eq!(value, GraphValue::Str("hello!".into()));
}

#[test]
fn other_lifecycle_points_are_not_delivered() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let mut dispatcher = EventDispatcher::new();
  dispatcher.add_subscriber(Arc::new(Recorder {
    label:         "pre-only",
    subscriptions: vec![EventSubscription::new(EventKind::PreDeserialize)],
    seen:          seen.clone(),
  }));

  assert!(dispatcher.listens_for(EventKind::PreDeserialize));
  assert!(!dispatcher.listens_for(EventKind::PostDeserialize));

  let mut value = GraphValue::Null;
  let mut event = ObjectEvent::new(EventKind::PostDeserialize, "test.Point", "json", &mut value);
  dispatcher.dispatch(&mut event).expect("dispatch");
  assert!(seen.lock().expect("seen log").is_empty());
}
