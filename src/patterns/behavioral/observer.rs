use crate::transcript::Transcript;

pub trait Observer {
    fn update(&mut self, event: &str, out: &mut Transcript);
}

pub struct NamedObserver {
    name: String,
    received: usize,
}

impl NamedObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: 0,
        }
    }

    pub fn received(&self) -> usize {
        self.received
    }
}

impl Observer for NamedObserver {
    fn update(&mut self, event: &str, out: &mut Transcript) {
        self.received += 1;
        out.line(format!("{} received: {}", self.name, event));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

/// Keeps observers in attach order and notifies them in that order.
#[derive(Default)]
pub struct Subject {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: usize,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &str, out: &mut Transcript) {
        for (_, observer) in self.observers.iter_mut() {
            observer.update(event, out);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut subject = Subject::new();
    subject.attach(Box::new(NamedObserver::new("Observer 1")));
    subject.attach(Box::new(NamedObserver::new("Observer 2")));

    subject.notify("Event A", out);
    subject.notify("Event B", out);
}

pub const EXPECTED: &[&str] = &[
    "Observer 1 received: Event A",
    "Observer 2 received: Event A",
    "Observer 1 received: Event B",
    "Observer 2 received: Event B",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(Transcript::capture(demo).lines(), EXPECTED);
    }

    #[test]
    fn test_detached_observer_is_not_notified() {
        let mut subject = Subject::new();
        let first = subject.attach(Box::new(NamedObserver::new("first")));
        subject.attach(Box::new(NamedObserver::new("second")));

        assert!(subject.detach(first));
        assert!(!subject.detach(first));

        let mut out = Transcript::new();
        subject.notify("ping", &mut out);
        assert_eq!(out.lines(), ["second received: ping"]);
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn test_observer_counts_events() {
        let mut observer = NamedObserver::new("counter");
        let mut out = Transcript::new();
        observer.update("one", &mut out);
        observer.update("two", &mut out);

        assert_eq!(observer.received(), 2);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_notify_without_observers() {
        let mut subject = Subject::new();
        let mut out = Transcript::new();
        subject.notify("ping", &mut out);
        assert!(subject.is_empty());
        assert!(out.is_empty());
    }
}
