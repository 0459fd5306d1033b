//! High-level renderer: seed, bag, and the per-transaction paint loop.
use tracing::{debug, warn};

use crate::bag::ShuffleBag;
use crate::block::Block;
use crate::error::{Error, Result};
use crate::render::surface::Pixmap;
use crate::seed::derive_seed;
use crate::style::{Rgb, StyleOptions};
use crate::synth::synthesize;

/// Configuration for rendering one block.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output surface width in pixels.
    pub width: u32,
    /// Output surface height in pixels.
    pub height: u32,
    /// Scales shape width.
    pub mod1: f64,
    /// Scales shape height.
    pub mod2: f64,
    /// Reserved by the preset; not consumed by the core pipeline.
    pub mod3: f64,
    /// Carried for host-side composition; not consumed per shape.
    pub color1: Rgb,
    /// Canvas clear color.
    pub background: Rgb,
    /// Optional cap on transactions processed, bounding worst-case cost.
    pub max_transactions: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_options(256, 256, &StyleOptions::default())
    }
}

impl RenderConfig {
    /// Creates a config from a style preset and surface dimensions.
    pub fn from_options(width: u32, height: u32, options: &StyleOptions) -> Self {
        Self {
            width,
            height,
            mod1: options.mod1,
            mod2: options.mod2,
            mod3: options.mod3,
            color1: options.color1,
            background: options.background,
            max_transactions: None,
        }
    }

    /// Sets the surface dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the three numeric modifiers.
    pub fn with_modifiers(mut self, mod1: f64, mod2: f64, mod3: f64) -> Self {
        self.mod1 = mod1;
        self.mod2 = mod2;
        self.mod3 = mod3;
        self
    }

    /// Sets the background clear color.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Caps the number of transactions processed.
    pub fn with_max_transactions(mut self, max_transactions: usize) -> Self {
        self.max_transactions = Some(max_transactions);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Modifiers must be finite and non-negative; they are rejected rather
    /// than clamped, so an invalid value never silently alters the output.
    /// Values above 1.0 are allowed — the [0, 1] range is an authoring
    /// convention, not a runtime invariant.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("mod1", self.mod1),
            ("mod2", self.mod2),
            ("mod3", self.mod3),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidModifier { name, value });
            }
        }
        Ok(())
    }
}

/// Result of rendering one block.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Shapes painted; equals the number of transactions processed.
    pub shapes_painted: usize,
    /// Total bag draws consumed (five per shape).
    pub draws_consumed: u64,
}

/// Renders blocks with a fixed, validated configuration.
///
/// Each [`render`](StyleRenderer::render) call is a single synchronous unit
/// of work that owns a fresh bag; nothing survives between invocations, and
/// neither the bag nor the surface may be shared with a concurrent render.
#[derive(Debug, Clone)]
pub struct StyleRenderer {
    config: RenderConfig,
}

impl StyleRenderer {
    /// Validates `config` once up front.
    pub fn try_new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders `block` onto `surface`.
    ///
    /// Derives the seed, builds a fresh bag, clears the surface to the
    /// background color, then paints one synthesized shape per transaction
    /// in transaction order — later transactions layer over earlier ones.
    /// All validation happens before the surface is touched, so on error the
    /// surface is unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHashFormat`] for a malformed hash, and
    /// [`Error::InvalidDimensions`] when `surface` does not match the
    /// configured dimensions.
    pub fn render(&self, block: &Block, surface: &mut Pixmap) -> Result<RenderReport> {
        if surface.width() != self.config.width || surface.height() != self.config.height {
            return Err(Error::InvalidDimensions {
                width: surface.width(),
                height: surface.height(),
            });
        }

        let seed = derive_seed(&block.hash)?;
        let mut bag = ShuffleBag::new(seed);
        debug!(seed, transactions = block.transaction_count(), "seeded");

        let total = block.transaction_count();
        let count = match self.config.max_transactions {
            Some(cap) if total > cap => {
                warn!(total, cap, "transaction count exceeds cap, truncating");
                cap
            }
            _ => total,
        };

        surface.clear(self.config.background);
        for _ in 0..count {
            let out = synthesize(
                &mut bag,
                self.config.width,
                self.config.height,
                self.config.mod1,
                self.config.mod2,
            );
            surface.fill_rect(&out.shape, out.color);
        }

        let report = RenderReport {
            shapes_painted: count,
            draws_consumed: bag.draws_consumed(),
        };
        debug!(?report, "render done");
        Ok(report)
    }
}

/// Renders `block` onto `surface` with `config`. One-shot convenience over
/// [`StyleRenderer`].
pub fn render_block(
    block: &Block,
    config: RenderConfig,
    surface: &mut Pixmap,
) -> Result<RenderReport> {
    StyleRenderer::try_new(config)?.render(block, surface)
}
