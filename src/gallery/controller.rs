use log::{debug, warn};

use super::host::{
    Deferred, Document, Event, EventKind, Handler, Key, ListenerId, NodeId, Scheduler,
    Subscription, Target, CLOSE_DELAY, OPEN_TICK,
};
use super::{
    ACTIVE, CLOSE, CONTENT, COUNTER, DOT, DOT_ACTIVE, DOT_INACTIVE, HIDDEN, NEXT,
    OPACITY_HIDDEN, OPACITY_VISIBLE, PREV, SCALE_COLLAPSED, SCALE_EXPANDED, SLIDE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Drives at most one rendered gallery overlay at a time.
///
/// All transitions are synchronous; the two timed steps (reveal after
/// [`OPEN_TICK`], final hide after [`CLOSE_DELAY`]) go through the
/// [`Scheduler`] and come back via [`run_deferred`](Self::run_deferred).
#[derive(Debug, Default)]
pub struct GalleryController {
    state: OverlayState,
    current_slide: usize,
    active_gallery: Option<String>,
    overlay: Option<NodeId>,
    key_listener: Option<ListenerId>,
    listeners: Vec<ListenerId>,
    epoch: u64,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn active_gallery(&self) -> Option<&str> {
        self.active_gallery.as_deref()
    }

    /// True while this controller owns the window key-down subscription.
    pub fn is_listening(&self) -> bool {
        self.key_listener.is_some()
    }

    /// Open the overlay rendered under `gallery_id`.
    ///
    /// Unknown ids are ignored. If another overlay is still bound (opening,
    /// open or mid-close) it is torn down synchronously first.
    pub fn open<D: Document, S: Scheduler>(
        &mut self,
        doc: &mut D,
        scheduler: &mut S,
        gallery_id: &str,
    ) {
        let Some(overlay) = doc.element_by_id(gallery_id) else {
            warn!("gallery '{}' not found, ignoring open", gallery_id);
            return;
        };

        if self.state != OverlayState::Closed {
            debug!(
                "gallery '{}' still bound ({:?}), tearing down before opening '{}'",
                self.active_gallery.as_deref().unwrap_or(""),
                self.state,
                gallery_id
            );
            self.collapse(doc);
            self.finish_close(doc);
        }

        self.epoch += 1;
        self.active_gallery = Some(gallery_id.to_string());
        self.overlay = Some(overlay);
        self.current_slide = 0;
        self.state = OverlayState::Opening;

        doc.remove_class(overlay, HIDDEN);
        scheduler.schedule(OPEN_TICK, Deferred::Reveal { epoch: self.epoch });
        doc.set_body_style("overflow", "hidden");

        self.attach(doc, overlay);
        self.show_slide(doc, 0);
        debug!("gallery '{}' opening (epoch {})", gallery_id, self.epoch);
    }

    /// Start the close transition. No-op unless opening or open.
    pub fn close<D: Document, S: Scheduler>(&mut self, doc: &mut D, scheduler: &mut S) {
        if !matches!(self.state, OverlayState::Opening | OverlayState::Open) {
            return;
        }
        self.collapse(doc);
        self.state = OverlayState::Closing;
        scheduler.schedule(CLOSE_DELAY, Deferred::FinishClose { epoch: self.epoch });
        debug!(
            "gallery '{}' closing",
            self.active_gallery.as_deref().unwrap_or("")
        );
    }

    /// Show slide `index`, wrapping in both directions modulo the slide count.
    pub fn show_slide<D: Document>(&mut self, doc: &mut D, index: i64) {
        if !matches!(self.state, OverlayState::Opening | OverlayState::Open) {
            return;
        }
        let Some(overlay) = self.overlay else { return };

        let slides = doc.query_all(overlay, SLIDE);
        if slides.is_empty() {
            debug!("overlay has no slides, ignoring navigation");
            return;
        }
        let total = slides.len();
        let current = index.rem_euclid(total as i64) as usize;
        self.current_slide = current;

        for (idx, slide) in slides.into_iter().enumerate() {
            if idx == current {
                doc.add_class(slide, ACTIVE);
                doc.set_style(slide, "display", "flex");
            } else {
                doc.remove_class(slide, ACTIVE);
                doc.set_style(slide, "display", "none");
            }
        }

        for (idx, dot) in doc.query_all(overlay, DOT).into_iter().enumerate() {
            let (on, off) = if idx == current {
                (DOT_ACTIVE, DOT_INACTIVE)
            } else {
                (DOT_INACTIVE, DOT_ACTIVE)
            };
            doc.remove_class(dot, off);
            doc.add_class(dot, on);
        }

        if let Some(counter) = doc.query(overlay, COUNTER) {
            doc.set_text(counter, &format!("{} / {}", current + 1, total));
        }
    }

    pub fn next<D: Document>(&mut self, doc: &mut D) {
        self.show_slide(doc, self.current_slide as i64 + 1);
    }

    pub fn previous<D: Document>(&mut self, doc: &mut D) {
        self.show_slide(doc, self.current_slide as i64 - 1);
    }

    /// Run a task previously handed to the scheduler. Tasks from an earlier
    /// open/close cycle, or arriving in the wrong state, are dropped.
    pub fn run_deferred<D: Document>(&mut self, doc: &mut D, task: Deferred) {
        match task {
            Deferred::Reveal { epoch } => {
                if epoch != self.epoch || self.state != OverlayState::Opening {
                    debug!("dropping stale reveal (epoch {})", epoch);
                    return;
                }
                let Some(overlay) = self.overlay else { return };
                doc.remove_class(overlay, OPACITY_HIDDEN);
                doc.add_class(overlay, OPACITY_VISIBLE);
                if let Some(content) = doc.query(overlay, CONTENT) {
                    doc.remove_class(content, SCALE_COLLAPSED);
                    doc.add_class(content, SCALE_EXPANDED);
                }
                self.state = OverlayState::Open;
                debug!(
                    "gallery '{}' open",
                    self.active_gallery.as_deref().unwrap_or("")
                );
            }
            Deferred::FinishClose { epoch } => {
                if epoch != self.epoch || self.state != OverlayState::Closing {
                    debug!("dropping stale close (epoch {})", epoch);
                    return;
                }
                self.finish_close(doc);
            }
        }
    }

    /// Route a fired subscription. Returns true when the event was consumed,
    /// which stops it from bubbling to outer listeners.
    pub fn handle<D: Document, S: Scheduler>(
        &mut self,
        doc: &mut D,
        scheduler: &mut S,
        handler: Handler,
        event: &Event,
    ) -> bool {
        match handler {
            Handler::Close => {
                self.close(doc, scheduler);
                true
            }
            Handler::Backdrop => {
                if event.target.is_some() && event.target == self.overlay {
                    self.close(doc, scheduler);
                    true
                } else {
                    false
                }
            }
            Handler::Previous => {
                self.previous(doc);
                true
            }
            Handler::Next => {
                self.next(doc);
                true
            }
            Handler::Indicator(idx) => {
                self.show_slide(doc, idx as i64);
                true
            }
            Handler::Keyboard => {
                if !self.accepts_keys(doc) {
                    return false;
                }
                match event.key {
                    Some(Key::ArrowLeft) => self.previous(doc),
                    Some(Key::ArrowRight) => self.next(doc),
                    Some(Key::Escape) => self.close(doc, scheduler),
                    _ => return false,
                }
                true
            }
        }
    }

    fn accepts_keys<D: Document>(&self, doc: &D) -> bool {
        matches!(self.state, OverlayState::Opening | OverlayState::Open)
            && self.overlay.is_some_and(|o| !doc.has_class(o, HIDDEN))
    }

    fn attach<D: Document>(&mut self, doc: &mut D, overlay: NodeId) {
        match doc.query(overlay, CLOSE) {
            Some(close) => self.bind(doc, close, Handler::Close),
            None => debug!("overlay has no close control"),
        }
        self.bind(doc, overlay, Handler::Backdrop);
        if let Some(prev) = doc.query(overlay, PREV) {
            self.bind(doc, prev, Handler::Previous);
        }
        if let Some(next) = doc.query(overlay, NEXT) {
            self.bind(doc, next, Handler::Next);
        }
        for (idx, dot) in doc.query_all(overlay, DOT).into_iter().enumerate() {
            self.bind(doc, dot, Handler::Indicator(idx));
        }

        self.key_listener = Some(doc.listen(Subscription {
            target: Target::Window,
            kind: EventKind::KeyDown,
            handler: Handler::Keyboard,
        }));
    }

    /// Pointer controls answer both mouse clicks and touch-end.
    fn bind<D: Document>(&mut self, doc: &mut D, node: NodeId, handler: Handler) {
        for kind in [EventKind::Click, EventKind::TouchEnd] {
            let id = doc.listen(Subscription {
                target: Target::Node(node),
                kind,
                handler,
            });
            self.listeners.push(id);
        }
    }

    fn collapse<D: Document>(&self, doc: &mut D) {
        let Some(overlay) = self.overlay else { return };
        doc.remove_class(overlay, OPACITY_VISIBLE);
        doc.add_class(overlay, OPACITY_HIDDEN);
        if let Some(content) = doc.query(overlay, CONTENT) {
            doc.remove_class(content, SCALE_EXPANDED);
            doc.add_class(content, SCALE_COLLAPSED);
        }
    }

    fn finish_close<D: Document>(&mut self, doc: &mut D) {
        if let Some(overlay) = self.overlay.take() {
            doc.add_class(overlay, HIDDEN);
        }
        doc.set_body_style("overflow", "");
        self.release(doc);
        debug!(
            "gallery '{}' closed",
            self.active_gallery.as_deref().unwrap_or("")
        );
        self.active_gallery = None;
        self.current_slide = 0;
        self.state = OverlayState::Closed;
    }

    fn release<D: Document>(&mut self, doc: &mut D) {
        for id in self.listeners.drain(..) {
            doc.unlisten(id);
        }
        if let Some(id) = self.key_listener.take() {
            if !doc.unlisten(id) {
                warn!("key listener {:?} was already removed", id);
            }
        }
    }
}
