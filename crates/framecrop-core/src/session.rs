//! The interactive editing session.
//!
//! An [`EditorSession`] exclusively owns the active source image, the current
//! transform and the rendered frame. Every mutation re-renders synchronously,
//! so the frame is always current before any read (preview or export).
//!
//! # Loading
//!
//! Reading the selected file is the one asynchronous step in the editor. A
//! load is split into [`EditorSession::begin_load`], called the moment a file
//! is selected, which issues a [`LoadTicket`] and supersedes every earlier
//! ticket, and [`EditorSession::finish_load`], called with the bytes once
//! the read completes, which decodes and installs the image only if the
//! ticket is still current. A selection whose read finishes after a newer
//! selection was made is therefore discarded, whatever order the reads
//! complete in. The bytes are owned by a pending load for the decode
//! step and released as soon as it is consumed or dropped.

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::{ConfigError, EditorConfig};
use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::EncodeError;
use crate::export::{export_crop, ExportedCrop};
use crate::geometry::{Dimensions, Offset, Rect};
use crate::render::{Compositor, Surface};
use crate::transform::Transform;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation needing a source image ran before one was loaded.
    #[error("No image loaded")]
    NoImage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Result of finishing a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image is now active; carries its natural size.
    Loaded(Dimensions),
    /// A newer load (or image) arrived first; this result was discarded.
    Superseded,
}

/// Identifies one file selection. Only the most recently issued ticket
/// can install an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u32);

impl LoadTicket {
    /// Rebuild a ticket from its raw id (e.g. one handed across to JS).
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

/// A load whose bytes have arrived: its ticket plus the undecoded file.
#[derive(Debug)]
struct PendingLoad {
    ticket: LoadTicket,
    bytes: Vec<u8>,
}

impl PendingLoad {
    fn new(ticket: LoadTicket, bytes: Vec<u8>) -> Self {
        Self { ticket, bytes }
    }

    fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Owner of all mutable editor state.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    compositor: Compositor,
    surface: Surface,
    image: Option<DecodedImage>,
    transform: Transform,
    current_ticket: LoadTicket,
}

impl EditorSession {
    /// Start a session with a validated configuration.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            compositor: Compositor::new(&config),
            surface: Surface::new(config.viewport),
            image: None,
            transform: Transform::default(),
            current_ticket: LoadTicket(0),
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The crop window in viewport coordinates.
    pub fn mask_rect(&self) -> Rect {
        self.compositor.mask_rect()
    }

    /// The rendered frame, available only while an image is active.
    pub fn frame(&self) -> Option<&Surface> {
        self.image.as_ref().map(|_| &self.surface)
    }

    /// Register a new file selection, before its bytes are read.
    ///
    /// Every earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.supersede();
        debug!("load #{} started", self.current_ticket.0);
        self.current_ticket
    }

    /// Whether `ticket` would still be installed by [`Self::finish_load`].
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket == self.current_ticket
    }

    /// Decode the bytes read for `ticket` and make them the active image.
    ///
    /// A stale ticket is discarded without decoding. A decode failure clears
    /// the active image (the user has moved on from it), leaving the session
    /// with nothing to render or export until the next successful load.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        bytes: Vec<u8>,
    ) -> Result<LoadOutcome, SessionError> {
        self.decode_pending(PendingLoad::new(ticket, bytes))
    }

    /// Begin and finish a load in one step.
    pub fn load_image(&mut self, bytes: Vec<u8>) -> Result<Dimensions, SessionError> {
        let ticket = self.begin_load();
        match self.finish_load(ticket, bytes)? {
            LoadOutcome::Loaded(size) => Ok(size),
            // A freshly issued ticket is always current
            LoadOutcome::Superseded => Err(SessionError::NoImage),
        }
    }

    fn decode_pending(&mut self, pending: PendingLoad) -> Result<LoadOutcome, SessionError> {
        if !self.is_current(pending.ticket) {
            warn!(
                "load #{} ({} bytes) superseded by #{}, discarding",
                pending.ticket.0,
                pending.byte_len(),
                self.current_ticket.0
            );
            return Ok(LoadOutcome::Superseded);
        }

        let PendingLoad { ticket, bytes } = pending;
        let decoded = decode_image(&bytes);
        drop(bytes);
        let ticket = ticket.0;

        match decoded {
            Ok(image) => {
                let size = image.dimensions();
                info!("load #{} decoded {}x{} image", ticket, size.width, size.height);
                self.install(image);
                Ok(LoadOutcome::Loaded(size))
            }
            Err(e) => {
                warn!("load #{} failed: {}", ticket, e);
                self.clear_image();
                Err(e.into())
            }
        }
    }

    /// Install an already-decoded image, superseding any pending load.
    pub fn set_image(&mut self, image: DecodedImage) -> Result<(), SessionError> {
        if image.is_empty() {
            return Err(DecodeError::EmptyImage {
                width: image.width,
                height: image.height,
            }
            .into());
        }

        self.supersede();
        self.install(image);
        Ok(())
    }

    /// Drop the active image and blank the frame.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.surface.clear();
    }

    /// Set the pan offset (clamped to half the viewport per axis).
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.set_transform(Transform::new(Offset::new(x, y), self.transform.scale));
    }

    /// Set the scale (clamped to the configured range).
    pub fn set_scale(&mut self, scale: f64) {
        self.set_transform(Transform::new(self.transform.offset, scale));
    }

    /// Replace the whole transform (clamped) and re-render.
    pub fn set_transform(&mut self, transform: Transform) {
        let clamped = transform.clamped(self.config.viewport, &self.config.scale_range);
        if clamped != transform {
            debug!("transform {:?} clamped to {:?}", transform, clamped);
        }

        self.transform = clamped;
        self.render();
    }

    /// Crop the current frame to the mask and encode it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoImage` when no image is active.
    pub fn export(&self) -> Result<ExportedCrop, SessionError> {
        if self.image.is_none() {
            return Err(SessionError::NoImage);
        }

        Ok(export_crop(&self.surface, &self.compositor.mask_rect())?)
    }

    fn supersede(&mut self) {
        self.current_ticket = LoadTicket(self.current_ticket.0.wrapping_add(1));
    }

    fn install(&mut self, image: DecodedImage) {
        self.image = Some(image);
        self.render();
    }

    fn render(&mut self) {
        if let Some(image) = self.image.as_ref() {
            self.compositor.render(
                &mut self.surface,
                image,
                self.transform.offset,
                self.transform.scale,
            );
        }
    }
}
