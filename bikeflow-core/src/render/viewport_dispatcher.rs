use super::{Projector, ViewportEvent};

/// receives viewport change notifications from a [`ViewportDispatcher`].
pub trait ViewportObserver {
    fn on_viewport_change(&mut self, event: ViewportEvent, projector: &dyn Projector);
}

/// handle returned by [`ViewportDispatcher::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// explicit list of viewport observers. the mapping engine calls
/// [`ViewportDispatcher::dispatch`] with its projector after each camera change.
#[derive(Default)]
pub struct ViewportDispatcher<'a> {
    observers: Vec<(SubscriptionId, &'a mut dyn ViewportObserver)>,
    next_id: usize,
}

impl<'a> ViewportDispatcher<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: &'a mut dyn ViewportObserver) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// removes an observer. returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn dispatch(&mut self, event: ViewportEvent, projector: &dyn Projector) {
        log::debug!("viewport {event} -> {} observers", self.observers.len());
        for (_, observer) in self.observers.iter_mut() {
            observer.on_viewport_change(event, projector);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ViewportDispatcher, ViewportObserver};
    use crate::render::{Projector, ScreenPoint, ViewportEvent};
    use geo::Point;

    #[derive(Default)]
    struct Recorder {
        events: Vec<ViewportEvent>,
        last: Option<ScreenPoint>,
    }

    impl ViewportObserver for Recorder {
        fn on_viewport_change(&mut self, event: ViewportEvent, projector: &dyn Projector) {
            self.events.push(event);
            self.last = Some(projector.project(Point::new(1.0, 1.0)));
        }
    }

    #[test]
    fn test_dispatch_and_unsubscribe() {
        let projector = |p: Point<f64>| ScreenPoint::new(p.x() + 100.0, p.y() + 200.0);
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        {
            let mut dispatcher = ViewportDispatcher::new();
            let _a = dispatcher.subscribe(&mut first);
            let b = dispatcher.subscribe(&mut second);
            dispatcher.dispatch(ViewportEvent::Move, &projector);
            assert!(dispatcher.unsubscribe(b));
            assert!(!dispatcher.unsubscribe(b));
            assert_eq!(dispatcher.len(), 1);
            dispatcher.dispatch(ViewportEvent::MoveEnd, &projector);
        }
        assert_eq!(first.events, vec![ViewportEvent::Move, ViewportEvent::MoveEnd]);
        assert_eq!(second.events, vec![ViewportEvent::Move]);
        assert_eq!(first.last, Some(ScreenPoint::new(101.0, 201.0)));
    }
}
