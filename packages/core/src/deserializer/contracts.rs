use super::context::DeserializeContext;
use crate::error::{Error, Result};
use crate::events::{ObjectEvents, TokenSource};
use crate::format::FormatDescriptor;

/// Full-control deserialization strategy.
///
/// `count` follows [`ObjectEvents::new`]: zero means the object start token
/// is still in `source`, a nonzero value is the number of object scopes the
/// caller already opened.
pub trait RawDeserializer<F: FormatDescriptor> {
    type Output;

    /// Reads one object from `source`.
    ///
    /// # Errors
    ///
    /// Strategy specific; structural and producer errors propagate.
    fn execute(
        &self,
        source: &mut dyn TokenSource<F::Token>,
        ctx: &DeserializeContext<'_, F>,
        count: usize,
    ) -> Result<Self::Output>;
}

/// Reconstruction hook over one bounded object.
///
/// The hook may stop reading at any point; [`EventDriven`] drains the rest.
pub trait EventDeserializer<F: FormatDescriptor> {
    type Output;

    /// Builds a value from the object's tokens.
    ///
    /// # Errors
    ///
    /// Strategy specific; structural and producer errors propagate.
    fn deserialize(
        &self,
        events: &mut ObjectEvents<'_, F>,
        ctx: &DeserializeContext<'_, F>,
    ) -> Result<Self::Output>;
}

impl<F, D> EventDeserializer<F> for &D
where
    F: FormatDescriptor,
    D: EventDeserializer<F> + ?Sized,
{
    type Output = D::Output;

    fn deserialize(
        &self,
        events: &mut ObjectEvents<'_, F>,
        ctx: &DeserializeContext<'_, F>,
    ) -> Result<Self::Output> {
        (**self).deserialize(events, ctx)
    }
}

/// Drives an [`EventDeserializer`] as a [`RawDeserializer`].
///
/// After the hook returns, the bounded reader is drained, leaving the shared
/// source positioned right after the object's closing token. Siblings and
/// parents reading the same source therefore never see leftovers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventDriven<D>(pub D);

impl<D> EventDriven<D> {
    pub fn new(hook: D) -> Self {
        Self(hook)
    }

    pub fn hook(&self) -> &D {
        &self.0
    }

    pub fn into_inner(self) -> D {
        self.0
    }
}

impl<F, D> RawDeserializer<F> for EventDriven<D>
where
    F: FormatDescriptor,
    D: EventDeserializer<F>,
{
    type Output = D::Output;

    fn execute(
        &self,
        source: &mut dyn TokenSource<F::Token>,
        ctx: &DeserializeContext<'_, F>,
        count: usize,
    ) -> Result<Self::Output> {
        let mut events = ObjectEvents::with_config(source, ctx.format(), count, ctx.config())?;
        let value = self.0.deserialize(&mut events, ctx)?;

        let skipped = events.drain()?;
        if skipped > 0 {
            tracing::trace!(skipped, "drained tokens left unread by the hook");
        }

        if !events.is_done() {
            let depth = events.depth();
            if ctx.config().reject_truncated {
                return Err(Error::Truncated { depth });
            }
            tracing::warn!(depth, "input ended before the object closed");
        }
        Ok(value)
    }
}
