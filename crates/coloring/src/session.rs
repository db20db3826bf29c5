use image::{Rgb, RgbImage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};
use tracing::{debug, info};

use crate::{
    error::{ColoringError, Result},
    fill,
    heal::GapHealer,
    history::HistoryStack,
    io::{self, SaveFormat},
    pipeline::Pipeline,
    types::ColoringPage,
};

/// Free-hand stroke progress.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StrokeState {
    Idle,
    Drawing { last: (f32, f32) },
}

/// Transient per-session edit state: active color, fill-tool flag and stroke
/// progress. Mutated by input handlers; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub color: Rgb<u8>,
    pub fill_enabled: bool,
    stroke: StrokeState,
}

impl Default for EditState {
    fn default() -> Self {
        Self {
            color: Rgb([0, 0, 0]),
            fill_enabled: false,
            stroke: StrokeState::Idle,
        }
    }
}

/// One edit operation on a session, in serializable form.
///
/// Mirrors the interactive surface so hosts can script or replay edits.
#[derive(
    Debug, Clone,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq
)]
#[serde(tag = "type", content = "params")]
#[strum(serialize_all = "snake_case")]
pub enum EditCommand {
    /// Set the active draw/fill color.
    #[serde(rename = "set_color")]
    SetColor { color: [u8; 3] },

    /// Enable or disable the fill tool.
    #[serde(rename = "set_fill")]
    SetFill { enabled: bool },

    /// Draw a free-hand line segment in the active color.
    #[serde(rename = "stroke")]
    Stroke { from: [f32; 2], to: [f32; 2] },

    /// Flood-fill the region at a point with the active color.
    #[serde(rename = "fill")]
    Fill { at: [i32; 2] },

    /// Undo the most recent checkpointed edit.
    #[serde(rename = "undo")]
    Undo,
}

impl EditCommand {
    /// Get the JSON schema for all commands.
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(EditCommand)
    }

    /// Get a list of all available command names.
    pub fn command_names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    /// Get a description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SetColor { .. } => "Set the active color used by stroke and fill",
            Self::SetFill { .. } => "Enable or disable the bucket-fill tool",
            Self::Stroke { .. } => "Draw a straight line segment onto the page",
            Self::Fill { .. } => "Flood-fill the enclosed region around a point",
            Self::Undo => "Revert to the previous history checkpoint",
        }
    }

    /// Apply the command to a session.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        match *self {
            Self::SetColor { color } => {
                session.set_color(Rgb(color));
                Ok(())
            }
            Self::SetFill { enabled } => {
                session.set_fill_enabled(enabled);
                Ok(())
            }
            Self::Stroke { from, to } => {
                session.stroke((from[0], from[1]), (to[0], to[1]), session.color());
                Ok(())
            }
            Self::Fill { at } => {
                let color = session.color();
                session.fill((at[0], at[1]), color).map(|_| ())
            }
            Self::Undo => session.undo().map(|_| ()),
        }
    }
}

/// An interactive coloring session: the single authoritative page, its
/// history, the edit state, and the generation pipeline.
///
/// All mutators take `&mut self`, so a second `generate` cannot interleave
/// with one in flight; callers wanting a responsive UI run these calls off
/// the interaction thread and marshal the page back.
pub struct Session {
    pipeline: Pipeline,
    healer: GapHealer,
    page: Option<ColoringPage>,
    history: HistoryStack,
    state: EditState,
}

impl Session {
    /// A session around the standard pipeline and healer.
    pub fn new() -> Self {
        Self::with_pipeline(Pipeline::builder().build())
    }

    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            healer: GapHealer::default(),
            page: None,
            history: HistoryStack::new(),
            state: EditState::default(),
        }
    }

    pub fn page(&self) -> Option<&ColoringPage> {
        self.page.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn color(&self) -> Rgb<u8> {
        self.state.color
    }

    /// Update the active color. No effect on the page itself.
    pub fn set_color(&mut self, color: Rgb<u8>) {
        self.state.color = color;
    }

    pub fn fill_enabled(&self) -> bool {
        self.state.fill_enabled
    }

    /// Toggle the fill tool. No effect on the page itself.
    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.state.fill_enabled = enabled;
    }

    /// Run the outline pipeline and gap healer on a photo, replacing any
    /// previous page and resetting history. On failure the previous page and
    /// history are left untouched.
    pub fn generate(&mut self, photo: &RgbImage, bounds: (u32, u32)) -> Result<&ColoringPage> {
        let mut generated = self.pipeline.process(photo, bounds)?;
        let healed = self.healer.heal(&mut generated.page, &generated.contours)?;
        info!(
            width = generated.page.width(),
            height = generated.page.height(),
            contours = generated.contours.len(),
            healed,
            "generated coloring page"
        );

        self.history.reset(&generated.page);
        self.state.stroke = StrokeState::Idle;
        self.page = Some(generated.page);
        self.current_page()
    }

    /// Continue a session from an externally produced page (for example a
    /// previously saved one). Clears history down to this page.
    pub fn adopt_page(&mut self, page: ColoringPage) {
        self.history.reset(&page);
        self.state.stroke = StrokeState::Idle;
        self.page = Some(page);
    }

    /// Pointer pressed. Enters `Drawing` when a page exists and the point is
    /// on the canvas.
    pub fn pointer_down(&mut self, point: (f32, f32)) {
        let Some(page) = &self.page else { return };
        if page.contains(point.0 as i32, point.1 as i32) {
            self.state.stroke = StrokeState::Drawing { last: point };
        }
    }

    /// Pointer moved. While drawing, paints a segment from the last point to
    /// this one in the active color; points off the canvas are ignored.
    pub fn pointer_move(&mut self, point: (f32, f32)) {
        let StrokeState::Drawing { last } = self.state.stroke else {
            return;
        };
        let Some(page) = &mut self.page else { return };
        if !page.contains(point.0 as i32, point.1 as i32) {
            return;
        }

        imageproc::drawing::draw_line_segment_mut(
            page.image_mut(),
            last,
            point,
            self.state.color,
        );
        self.state.stroke = StrokeState::Drawing { last: point };
    }

    /// Pointer released. Leaves `Drawing`.
    pub fn pointer_up(&mut self) {
        self.state.stroke = StrokeState::Idle;
    }

    /// Double-click: flood-fill at the clicked pixel when the fill tool is
    /// enabled and a page exists; otherwise nothing happens.
    pub fn double_click(&mut self, point: (i32, i32)) -> Result<Option<&ColoringPage>> {
        if self.page.is_none() || !self.state.fill_enabled {
            return Ok(None);
        }
        let color = self.state.color;
        self.fill(point, color).map(Some)
    }

    /// Draw a single straight segment in `color`. No-op without a page or
    /// when either endpoint is off the canvas.
    pub fn stroke(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
        let Some(page) = &mut self.page else { return };
        if !page.contains(from.0 as i32, from.1 as i32)
            || !page.contains(to.0 as i32, to.1 as i32)
        {
            return;
        }
        imageproc::drawing::draw_line_segment_mut(page.image_mut(), from, to, color);
    }

    /// Flood-fill the region around `point` with `color`, checkpointing the
    /// result in history. On failure the page is unchanged and nothing is
    /// pushed.
    pub fn fill(&mut self, point: (i32, i32), color: Rgb<u8>) -> Result<&ColoringPage> {
        let page = self.page.as_mut().ok_or(ColoringError::NoPageLoaded)?;
        let painted = fill::flood_fill(page, point, color)?;
        debug!(painted, x = point.0, y = point.1, "flood fill applied");

        if let Some(page) = &self.page {
            self.history.push(page);
        }
        self.current_page()
    }

    /// Revert to the previous history checkpoint. With only the initial
    /// snapshot on the stack this is a no-op returning the current page.
    pub fn undo(&mut self) -> Result<&ColoringPage> {
        if self.page.is_none() {
            return Err(ColoringError::NoPageLoaded);
        }
        if let Some(previous) = self.history.undo() {
            // The caller keeps working on an independent copy of the
            // snapshot; the stack entry itself is never aliased.
            self.page = Some(previous.snapshot());
        }
        self.current_page()
    }

    /// Save the current page to file.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: SaveFormat) -> Result<()> {
        let page = self.page.as_ref().ok_or(ColoringError::NoPageLoaded)?;
        io::save_page(page, path, format)
    }

    fn current_page(&self) -> Result<&ColoringPage> {
        self.page.as_ref().ok_or(ColoringError::NoPageLoaded)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
