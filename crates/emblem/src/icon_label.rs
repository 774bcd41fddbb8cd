//! The icon+label control: configuration, hover ratio, cached layout, and
//! redraw notification.

use emblem_core::logging::targets;
use emblem_core::{RedrawHandle, Signal};
use emblem_render::{Surface, TextMeasurer};

use crate::compositor::render_frame;
use crate::config::IconLabelConfig;
use crate::constraint::MeasureSpec;
use crate::error::ConfigurationError;
use crate::layout::{LayoutResult, measure_and_arrange};

/// What a batch of configuration changes invalidated.
///
/// Ordered by severity: `Layout` implies the cached geometry is stale,
/// `Paint` only that the next frame will look different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dirty {
    /// Nothing observable changed.
    None,
    /// Colors, border, radius, or animation mode changed; geometry is
    /// still valid.
    Paint,
    /// Geometry-affecting fields changed; the cached layout is stale.
    Layout,
}

/// A composite icon-and-label control.
///
/// `IconLabel` owns a validated [`IconLabelConfig`], the hover ratio, and
/// the layout computed from them. It never draws on its own schedule:
/// hosts call [`layout`](Self::layout) when constraints change and
/// [`render`](Self::render) once per frame. State changes announce
/// themselves through [`redraw_requested`](Self::redraw_requested) and,
/// when one is attached, a [`RedrawHandle`]; the host decides when a frame
/// actually happens.
///
/// Configuration changes are batched through [`update`](Self::update): one
/// closure may touch any number of fields, the result is validated as a
/// whole, and at most one redraw request is issued for the batch.
pub struct IconLabel {
    config: IconLabelConfig,
    ratio: f32,
    /// Bumped on every layout-affecting config change.
    config_revision: u64,
    /// Cached layout, tagged with the revision it was computed from.
    layout: Option<(u64, LayoutResult)>,
    last_specs: Option<(MeasureSpec, MeasureSpec)>,
    redraw: Option<RedrawHandle>,
    /// Emitted once per state change that warrants a new frame.
    pub redraw_requested: Signal<()>,
}

impl IconLabel {
    /// Create a control from a validated configuration.
    pub fn new(config: IconLabelConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            config,
            ratio: 0.0,
            config_revision: 0,
            layout: None,
            last_specs: None,
            redraw: None,
            redraw_requested: Signal::new(),
        })
    }

    /// The current configuration.
    pub fn config(&self) -> &IconLabelConfig {
        &self.config
    }

    /// The current hover ratio in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Route redraw requests into a host queue in addition to the signal.
    pub fn set_redraw_handle(&mut self, handle: RedrawHandle) {
        self.redraw = Some(handle);
    }

    /// Set the hover ratio, clamped to `[0, 1]`.
    ///
    /// Requests a redraw only when the clamped value actually changed.
    /// Non-finite input is ignored and keeps the current ratio. The ratio
    /// never affects layout.
    pub fn set_ratio(&mut self, ratio: f32) {
        if !ratio.is_finite() {
            return;
        }
        let clamped = ratio.clamp(0.0, 1.0);
        if clamped != self.ratio {
            self.ratio = clamped;
            self.request_redraw();
        }
    }

    /// Apply a batch of configuration changes.
    ///
    /// The closure edits a copy of the current configuration. The edited
    /// copy is validated as a whole; on error nothing is applied and no
    /// redraw is requested. On success the change is classified as
    /// paint-only or layout-affecting and at most one redraw request is
    /// issued, however many fields the closure touched.
    pub fn update<F>(&mut self, edit: F) -> Result<Dirty, ConfigurationError>
    where
        F: FnOnce(&mut IconLabelConfig),
    {
        let mut next = self.config.clone();
        edit(&mut next);
        next.validate()?;

        let dirty = classify(&self.config, &next);
        if dirty == Dirty::None {
            return Ok(Dirty::None);
        }

        self.config = next;
        if dirty == Dirty::Layout {
            self.config_revision += 1;
        }
        self.request_redraw();
        Ok(dirty)
    }

    /// Whether the cached layout is stale or missing.
    pub fn needs_layout(&self) -> bool {
        match &self.layout {
            Some((revision, _)) => *revision != self.config_revision,
            None => true,
        }
    }

    /// Lay the control out against the given constraints and cache the
    /// result.
    pub fn layout(
        &mut self,
        measurer: &dyn TextMeasurer,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> &LayoutResult {
        let result = measure_and_arrange(&self.config, measurer, width_spec, height_spec);
        self.last_specs = Some((width_spec, height_spec));
        let (_, layout) = self.layout.insert((self.config_revision, result));
        layout
    }

    /// The cached layout, if one exists for the current configuration.
    pub fn current_layout(&self) -> Option<&LayoutResult> {
        match &self.layout {
            Some((revision, layout)) if *revision == self.config_revision => Some(layout),
            _ => None,
        }
    }

    /// Render one frame from the cached layout at the current ratio.
    ///
    /// Rendering with a stale or missing layout is a host sequencing bug;
    /// debug builds assert on it. Release builds recover by re-laying out
    /// against the most recent constraints, or render nothing if the
    /// control was never laid out.
    pub fn render(&mut self, surface: &mut dyn Surface, measurer: &dyn TextMeasurer) {
        debug_assert!(
            !self.needs_layout(),
            "render called without a fresh layout; call layout() first"
        );
        if self.needs_layout() {
            let Some((width_spec, height_spec)) = self.last_specs else {
                tracing::warn!(
                    target: targets::CORE,
                    "render called before the first layout; skipping frame"
                );
                return;
            };
            self.layout(measurer, width_spec, height_spec);
        }
        if let Some((_, layout)) = &self.layout {
            render_frame(surface, layout, &self.config, measurer, self.ratio);
        }
    }

    fn request_redraw(&self) {
        self.redraw_requested.emit(());
        if let Some(handle) = &self.redraw {
            handle.request();
        }
    }
}

impl std::fmt::Debug for IconLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconLabel")
            .field("ratio", &self.ratio)
            .field("config_revision", &self.config_revision)
            .field("has_layout", &self.layout.is_some())
            .finish()
    }
}

/// Classify a configuration change by what it invalidates.
fn classify(old: &IconLabelConfig, new: &IconLabelConfig) -> Dirty {
    if old == new {
        return Dirty::None;
    }
    let layout_affecting = old.icon != new.icon
        || old.icon_size != new.icon_size
        || old.text != new.text
        || old.gap != new.gap
        || old.padding != new.padding
        || old.arrangement != new.arrangement
        || old.background != new.background
        || old.background_padding != new.background_padding
        || old.truncate_side != new.truncate_side;
    if layout_affecting {
        Dirty::Layout
    } else {
        Dirty::Paint
    }
}

static_assertions::assert_impl_all!(IconLabel: Send, Sync);
