use crate::parsing::{Notation, Span, kinds::html_tag, parse_image};
use crate::resize::ResizeError;
use crate::resize::geometry::Point;
use crate::resize::host::{ImageElement, ResizeHost};
use crate::resize::session::DragSession;
use crate::resize::zoom::ZoomSettings;
use crate::rewrite::render_image_tag;

/// Baseline zoom adopted when the source notation carries none.
const DEFAULT_ZOOM: u32 = 100;

/// How a pointer release ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The final tag was written over the located span.
    Committed,
    /// No span could be located, or the host refused the edit; the preview
    /// was discarded and the text left as-is.
    AnchorLost,
    /// No drag was in progress.
    Idle,
}

/// The resize state machine.
///
/// `Idle` and `Dragging` are represented by the presence of the single
/// optional [`DragSession`]; a second session cannot be constructed while
/// one is live. All handlers are no-ops when the session they need is
/// absent, so events that straggle in after an abort are harmless.
pub struct ResizeController<H: ResizeHost> {
    host: H,
    settings: ZoomSettings,
    session: Option<DragSession<H::Image>>,
}

impl<H: ResizeHost> ResizeController<H> {
    pub fn new(host: H) -> Self {
        Self::with_settings(host, ZoomSettings::default())
    }

    pub fn with_settings(host: H, settings: ZoomSettings) -> Self {
        Self {
            host,
            settings,
            session: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Arms a drag from a qualifying press near the edge of `image`.
    ///
    /// Edge-proximity qualification is the caller's precondition; this
    /// method resolves the image's line, parses its notation, performs the
    /// one-time upgrade rewrite for legacy notations and snapshots the
    /// session. Returns whether the machine is now dragging; every failure
    /// is a silent no-op that stays Idle.
    pub fn pointer_press(&mut self, image: H::Image, pointer: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        match self.arm(image, pointer) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(error = %err, "resize arm failed");
                false
            }
        }
    }

    fn arm(&mut self, image: H::Image, pointer: Point) -> Result<(), ResizeError> {
        let pos = self
            .host
            .resolve_position(&image)
            .ok_or(ResizeError::PositionUnresolved)?;
        let line = self
            .host
            .line_at(pos)
            .ok_or(ResizeError::PositionUnresolved)?;
        let parsed = parse_image(&line.text).ok_or(ResizeError::NoSyntaxAtLine(line.start))?;

        let baseline_zoom = match parsed.notation {
            Notation::HtmlTag => parsed.zoom_percent.unwrap_or(DEFAULT_ZOOM),
            Notation::Markdown | Notation::Wikilink => {
                // The one-time upgrade: from here on the line carries the
                // HTML notation. Width/height pass through unchanged.
                let tag =
                    render_image_tag(&parsed.path, parsed.alt.as_deref(), parsed.dims, DEFAULT_ZOOM);
                let applied = self.host.replace_range(
                    line.start + parsed.span.start,
                    line.start + parsed.span.end,
                    &tag,
                );
                if !applied {
                    tracing::warn!(path = %parsed.path, "host rejected the notation upgrade");
                    return Err(ResizeError::EditRejected(parsed.path));
                }
                DEFAULT_ZOOM
            }
        };

        // Geometry is captured once, after any upgrade; the element is
        // assumed stationary on screen for the rest of the gesture.
        let image_center = image.bounding_box().center();
        let session = DragSession {
            path: parsed.path,
            alt: parsed.alt,
            dims: parsed.dims,
            line,
            baseline_zoom,
            pointer_origin: pointer,
            image_center,
            baseline_distance: pointer.distance_to(image_center),
            image,
        };
        tracing::debug!(
            path = %session.path,
            zoom = session.baseline_zoom,
            origin = ?session.pointer_origin,
            "resize drag armed"
        );
        self.host.set_pointer_tracking(true);
        self.session = Some(session);
        Ok(())
    }

    /// Streams the live zoom preview. Rendering-only: never mutates text,
    /// and a no-op unless a drag is in progress.
    pub fn pointer_move(&mut self, pointer: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let distance = pointer.distance_to(session.image_center);
        let zoom =
            self.settings
                .zoom_for_distance(session.baseline_zoom, session.baseline_distance, distance);
        session.image.set_preview_zoom(zoom);
    }

    /// Commits the gesture: renders the final tag and writes it over a span
    /// re-derived from the current line text.
    pub fn pointer_release(&mut self) -> CommitOutcome {
        let Some(session) = self.session.take() else {
            return CommitOutcome::Idle;
        };
        let outcome = match self.commit(&session) {
            Ok(()) => CommitOutcome::Committed,
            Err(err) => {
                tracing::warn!(error = %err, "resize commit aborted");
                CommitOutcome::AnchorLost
            }
        };
        self.detach(session);
        outcome
    }

    /// Abort check, driven by the host's change notifications while a drag
    /// is active. The session's own upgrade rewrite keeps the element
    /// attached and passes through here unharmed.
    pub fn document_changed(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if !session.image.is_attached() {
            tracing::warn!(path = %session.path, "tracked image left the document, aborting drag");
            if let Some(session) = self.session.take() {
                self.detach(session);
            }
        }
    }

    /// Host-teardown path: drops any active session without touching the
    /// text.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            self.detach(session);
        }
    }

    /// The single release funnel: every exit path ends here, so none can
    /// forget to let go of the global listeners.
    fn detach(&mut self, session: DragSession<H::Image>) {
        drop(session);
        self.host.set_pointer_tracking(false);
    }

    fn commit(&mut self, session: &DragSession<H::Image>) -> Result<(), ResizeError> {
        let zoom = self
            .settings
            .clamp(session.image.preview_zoom().unwrap_or(session.baseline_zoom) as i64);
        let tag = render_image_tag(&session.path, session.alt.as_deref(), session.dims, zoom);

        // Never trust the stale snapshot text for targeting; only its start
        // offset, as a cheap re-anchor hint into the current document.
        let line = self
            .host
            .line_at(session.line.start)
            .ok_or(ResizeError::SessionInvariant("line offset no longer resolves"))?;
        let span = locate_anchor(&line.text, &session.line.text, &session.path)
            .ok_or_else(|| ResizeError::AnchorLost(session.path.clone()))?;

        let applied = self
            .host
            .replace_range(line.start + span.start, line.start + span.end, &tag);
        if !applied {
            return Err(ResizeError::EditRejected(session.path.clone()));
        }
        tracing::debug!(path = %session.path, zoom, "resize committed");
        Ok(())
    }
}

/// Locates the span to replace at commit time.
///
/// Tries, in order: an `<img>` tag on the current line whose `src` matches
/// the session path; then a re-parse of the stale arm-time line text. The
/// stale span is a last resort and only trusted when the current line still
/// carries the identical substring at that span (the undo-during-drag case);
/// stored offsets are never applied over text that has drifted. When a line
/// carries two images with an identical path the first occurrence wins,
/// matching the arm-time behavior.
fn locate_anchor(current: &str, stale: &str, path: &str) -> Option<Span> {
    if let Some(span) = html_tag::find_with_path(current, path) {
        return Some(span);
    }
    let reparsed = parse_image(stale)?;
    if reparsed.path != path {
        return None;
    }
    let span = reparsed.span;
    let intact = current
        .get(span.start..span.end)
        .is_some_and(|cur| cur == span.slice(stale));
    intact.then_some(span)
}
