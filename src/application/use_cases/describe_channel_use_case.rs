//! Channel description use case.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::application::dto::ItemDescriptor;
use crate::application::services::{MessagePresentationService, PresentationContext};
use crate::domain::entities::Item;
use crate::domain::ports::ChannelPresenterPort;

/// Describes every item a channel presenter currently holds.
#[derive(Debug, Clone, Default)]
pub struct DescribeChannelUseCase {
    deleted_text: Option<String>,
}

impl DescribeChannelUseCase {
    #[must_use]
    pub const fn new() -> Self {
        Self { deleted_text: None }
    }

    /// Overrides the text shown for deleted messages.
    #[must_use]
    pub fn with_deleted_text(mut self, text: impl Into<String>) -> Self {
        self.deleted_text = Some(text.into());
        self
    }

    /// Executes the description. A missing presenter means nothing to render.
    #[must_use]
    pub fn execute(
        &self,
        presenter: Option<&dyn ChannelPresenterPort>,
        now: DateTime<Utc>,
    ) -> Vec<ItemDescriptor> {
        let Some(presenter) = presenter else {
            debug!("No channel presenter, nothing to describe");
            return Vec::new();
        };

        let in_thread = presenter.parent_message().is_some();
        let mut context = PresentationContext::new(presenter.channel().config(), in_thread);
        if let Some(text) = &self.deleted_text {
            context = context.with_deleted_text(text.clone());
        }
        let service = MessagePresentationService::new(context);

        let show_statuses = presenter.show_statuses();
        let items: Vec<Item> = presenter
            .items()
            .into_iter()
            .filter(|item| show_statuses || !item.is_status())
            .collect();

        debug!(
            channel = %presenter.channel().id(),
            in_thread,
            count = items.len(),
            "Describing channel items"
        );

        (0..items.len())
            .filter_map(|index| service.describe_item(index, &items, now))
            .collect()
    }
}
