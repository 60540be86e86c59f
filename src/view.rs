//! The print view: the one entry point that turns a token or a payload into
//! a printed document.
use crate::config::EngineConfig;
use crate::error::DocketError;
use docket_channel::{InMemoryPayloadStore, PayloadChannel, PrintPayload, Token};
use docket_layout::LayoutRegistry;
use docket_print::{IsolatedDocument, PrintHost, PrintOptions, PrintPipeline, PrintReport};
use docket_render::{ComposeOptions, Composer};
use docket_types::RenderedSurface;
use log::info;
use std::sync::Arc;

/// What opening a print view with a token led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// The token was unknown, already consumed or expired.
    NothingToPrint,
    Printed(PrintReport),
}

pub struct PrintView<H: PrintHost> {
    channel: PayloadChannel,
    layouts: LayoutRegistry,
    composer: Composer,
    pipeline: PrintPipeline<H>,
}

impl<H: PrintHost> PrintView<H> {
    pub fn channel(&self) -> &PayloadChannel {
        &self.channel
    }

    pub fn layouts(&self) -> &LayoutRegistry {
        &self.layouts
    }

    pub fn pipeline(&self) -> &PrintPipeline<H> {
        &self.pipeline
    }

    /// Consumes `token` and prints what was published under it.
    pub async fn open(&self, token: &Token) -> Result<ViewOutcome, DocketError> {
        match self.channel.consume(token)? {
            Some(payload) => Ok(ViewOutcome::Printed(self.print_payload(&payload).await?)),
            None => Ok(ViewOutcome::NothingToPrint),
        }
    }

    /// Prints a payload handed over directly, without the channel.
    pub async fn print_payload(&self, payload: &PrintPayload) -> Result<PrintReport, DocketError> {
        let surface = self.compose(payload);
        Ok(self.pipeline.print(&surface).await?)
    }

    /// Composes a payload with the layout of its form kind.
    pub fn compose(&self, payload: &PrintPayload) -> RenderedSurface {
        let kind = payload.form_kind();
        let layout = self.layouts.get(kind);
        info!(
            "Composing form {} '{}' with {} layout.",
            payload.document.form,
            payload.document.display_no,
            kind
        );
        self.composer.compose(&payload.document, &layout)
    }

    /// The page a print surface would load, without printing it.
    pub fn preview(&self, payload: &PrintPayload) -> IsolatedDocument {
        IsolatedDocument::new(&self.compose(payload))
    }
}

/// Assembles a [`PrintView`]. Unset parts default to an in-process channel,
/// the built-in layouts, and default compose and print options.
#[derive(Default)]
pub struct PrintViewBuilder {
    channel: Option<PayloadChannel>,
    layouts: Option<LayoutRegistry>,
    compose_options: ComposeOptions,
    print_options: PrintOptions,
}

impl PrintViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes channel, layouts and options from `config`.
    pub fn with_config(self, config: &EngineConfig) -> Result<Self, DocketError> {
        let channel =
            PayloadChannel::new(config.payload_store()).with_max_age(config.token_max_age());
        Ok(self
            .with_channel(channel)
            .with_layouts(config.layout_registry()?)
            .with_compose_options(config.compose_options())
            .with_print_options(config.print_options()))
    }

    pub fn with_channel(mut self, channel: PayloadChannel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_layouts(mut self, layouts: LayoutRegistry) -> Self {
        self.layouts = Some(layouts);
        self
    }

    pub fn with_compose_options(mut self, options: ComposeOptions) -> Self {
        self.compose_options = options;
        self
    }

    pub fn with_print_options(mut self, options: PrintOptions) -> Self {
        self.print_options = options;
        self
    }

    pub fn build<H: PrintHost>(self, host: H) -> Result<PrintView<H>, DocketError> {
        let layouts = match self.layouts {
            Some(layouts) => layouts,
            None => LayoutRegistry::builtin()?,
        };
        let channel = self
            .channel
            .unwrap_or_else(|| PayloadChannel::new(Arc::new(InMemoryPayloadStore::new())));
        Ok(PrintView {
            channel,
            layouts,
            composer: Composer::new(self.compose_options),
            pipeline: PrintPipeline::new(host, self.print_options),
        })
    }
}
