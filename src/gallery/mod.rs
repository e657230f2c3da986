//! Image-gallery overlay: markup rendering plus the open/close/navigation
//! controller that drives a rendered overlay through the [`Document`] seam.

use serde::Serialize;

use crate::render::{encode_path_whitespace, html_escape};

pub mod controller;
pub mod host;
pub mod script;

pub use controller::{GalleryController, OverlayState};
pub use host::{
    Deferred, Document, Event, EventKind, Handler, Key, ListenerId, ManualScheduler, NodeId,
    Scheduler, Subscription, Target, CLOSE_DELAY, OPEN_TICK,
};
pub use script::{runtime_script, TRIGGER_ATTR};

// ── Presentation classes shared by the renderer and the controller ──

pub(crate) const SLIDE: &str = "gallery-slide";
pub(crate) const DOT: &str = "gallery-dot";
pub(crate) const CONTENT: &str = "gallery-content";
pub(crate) const COUNTER: &str = "gallery-counter";
pub(crate) const PREV: &str = "gallery-prev";
pub(crate) const NEXT: &str = "gallery-next";
pub(crate) const CLOSE: &str = "gallery-close";

pub(crate) const HIDDEN: &str = "hidden";
pub(crate) const ACTIVE: &str = "active";
pub(crate) const OPACITY_HIDDEN: &str = "opacity-0";
pub(crate) const OPACITY_VISIBLE: &str = "opacity-100";
pub(crate) const SCALE_COLLAPSED: &str = "scale-95";
pub(crate) const SCALE_EXPANDED: &str = "scale-100";
pub(crate) const DOT_ACTIVE: &str = "bg-slate-700";
pub(crate) const DOT_INACTIVE: &str = "bg-slate-300";

/// A named, ordered, non-empty set of images rendered as one overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryDefinition {
    id: String,
    title: String,
    images: Vec<String>,
}

impl GalleryDefinition {
    /// Validate and build a definition. The identifier becomes the overlay's
    /// element id, so it must be non-empty and free of whitespace.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        images: Vec<String>,
    ) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("gallery identifier must not be empty".to_string());
        }
        if id.chars().any(char::is_whitespace) {
            return Err(format!("gallery identifier '{}' contains whitespace", id));
        }
        if images.is_empty() {
            return Err(format!("gallery '{}' has no images", id));
        }
        Ok(GalleryDefinition {
            id,
            title: title.into(),
            images,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Render the hidden overlay fragment for a gallery.
///
/// The first slide and first dot start active, the counter reads `1 / N`,
/// and every element the controller looks up carries its marker class.
/// Output is well-formed XML so it can be mounted into a [`crate::dom::MemoryDocument`].
pub fn render(gallery: &GalleryDefinition) -> String {
    let title = html_escape(&gallery.title);
    let total = gallery.images.len();

    let mut slides = String::new();
    for (idx, img) in gallery.images.iter().enumerate() {
        let src = html_escape(&encode_path_whitespace(img));
        let (state, display) = if idx == 0 {
            (" active", "display: flex;")
        } else {
            ("", "display: none;")
        };
        slides.push_str(&format!(
            r#"
                <div class="{SLIDE}{state} flex items-center justify-center w-full h-full" data-slide="{idx}" style="{display}">
                    <img src="{src}" alt="{title} - Image {num}" class="max-w-full max-h-[85vh] sm:max-h-[80vh] w-auto h-auto object-contain rounded-lg shadow-2xl" />
                </div>"#,
            num = idx + 1,
        ));
    }

    let mut dots = String::new();
    for idx in 0..total {
        let color = if idx == 0 { DOT_ACTIVE } else { DOT_INACTIVE };
        dots.push_str(&format!(
            r#"
                            <button class="{DOT} w-2 h-2 rounded-full {color} transition-all hover:bg-slate-500" data-dot="{idx}"></button>"#
        ));
    }

    format!(
        r#"
            <div id="{id}" class="gallery-modal {HIDDEN} fixed inset-0 z-[9999] bg-white/70 backdrop-blur-sm flex items-center justify-center p-2 sm:p-4 {OPACITY_HIDDEN} transition-opacity duration-300">
                <div class="{CONTENT} relative max-w-7xl w-full max-h-[95vh] sm:max-h-[90vh] transform {SCALE_COLLAPSED} transition-transform duration-300">
                    <button class="{CLOSE} absolute -top-10 sm:-top-12 right-2 sm:right-0 text-slate-700 hover:text-slate-900 transition-colors z-10 p-2 rounded-full hover:bg-slate-100" aria-label="Close gallery">
                        <svg class="w-8 h-8" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                    <div class="relative bg-white rounded-xl overflow-hidden shadow-2xl border border-slate-200">
                        <div class="bg-slate-50 border-b border-slate-200 text-slate-900 px-4 sm:px-6 py-3 sm:py-4 flex items-center justify-between gap-2">
                            <h3 class="text-lg sm:text-xl font-bold truncate">{title} - Gallery</h3>
                            <span class="{COUNTER} text-xs sm:text-sm text-slate-600 shrink-0">1 / {total}</span>
                        </div>
                        <div class="gallery-viewport relative bg-slate-50 min-h-[300px] sm:min-h-[400px] md:min-h-[500px] flex items-center justify-center p-4 sm:p-6 md:p-8 overflow-hidden">
                            <div class="gallery-slides relative w-full h-full flex items-center justify-center">{slides}
                            </div>
                        </div>
                        <button class="{PREV} absolute left-2 sm:left-4 top-1/2 -translate-y-1/2 bg-white hover:bg-slate-50 text-slate-700 p-2 sm:p-3 rounded-full shadow-lg border border-slate-200 transition-all hover:scale-110 z-10" aria-label="Previous image">
                            <svg class="w-5 h-5 sm:w-6 sm:h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"></path>
                            </svg>
                        </button>
                        <button class="{NEXT} absolute right-2 sm:right-4 top-1/2 -translate-y-1/2 bg-white hover:bg-slate-50 text-slate-700 p-2 sm:p-3 rounded-full shadow-lg border border-slate-200 transition-all hover:scale-110 z-10" aria-label="Next image">
                            <svg class="w-5 h-5 sm:w-6 sm:h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"></path>
                            </svg>
                        </button>
                        <div class="gallery-dots bg-slate-50 border-t border-slate-200 px-4 sm:px-6 py-3 sm:py-4 flex gap-2 justify-center flex-wrap">{dots}
                        </div>
                    </div>
                </div>
            </div>
"#,
        id = html_escape(&gallery.id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> GalleryDefinition {
        GalleryDefinition::new(
            "g1",
            "Gym <Manager>",
            vec![
                "images/a.png".to_string(),
                "images/My Photo.png".to_string(),
                "images/c.png".to_string(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_image_list() {
        let err = GalleryDefinition::new("g1", "Empty", vec![]).unwrap_err();
        assert!(err.contains("no images"));
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert!(GalleryDefinition::new("", "t", vec!["a.png".into()]).is_err());
        assert!(GalleryDefinition::new("my gallery", "t", vec!["a.png".into()]).is_err());
    }

    #[test]
    fn renders_hidden_overlay_with_counter() {
        let html = render(&three());
        assert!(html.contains(r#"id="g1""#));
        assert!(html.contains("gallery-modal hidden"));
        assert!(html.contains("1 / 3"));
        assert_eq!(html.matches("gallery-slide").count(), 4); // 3 slides + gallery-slides wrapper
        assert_eq!(html.matches(r#"data-dot=""#).count(), 3);
    }

    #[test]
    fn only_first_slide_and_dot_start_active() {
        let html = render(&three());
        assert_eq!(html.matches("gallery-slide active").count(), 1);
        assert_eq!(html.matches("display: flex;").count(), 1);
        assert_eq!(html.matches("display: none;").count(), 2);
        assert_eq!(html.matches(DOT_ACTIVE).count(), 1);
        assert_eq!(html.matches(DOT_INACTIVE).count(), 2);
    }

    #[test]
    fn spaces_in_paths_become_percent_twenty() {
        let html = render(&three());
        assert!(html.contains(r#"src="images/My%20Photo.png""#));
        assert!(!html.contains("My Photo.png"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render(&three());
        assert!(html.contains("Gym &lt;Manager&gt; - Gallery"));
        assert!(!html.contains("<Manager>"));
    }
}
