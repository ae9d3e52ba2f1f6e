use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::{Result, bail, eyre};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chatcell::application::dto::{CellAction, Gesture, ItemDescriptor};
use chatcell::application::services::GesturePolicy;
use chatcell::application::use_cases::{DescribeChannelUseCase, OpenRepliesUseCase};
use chatcell::domain::entities::{Item, MessageId};
use chatcell::domain::ports::ChannelPresenterPort;
use chatcell::infrastructure::config::GestureArg;
use chatcell::infrastructure::{
    AppConfig, CliArgs, Command, OutputFormat, SnapshotDefaults, SnapshotPresenter, StateConfig,
    StorageManager, UrlOpener,
};
use chatcell::presentation::widgets::aligned_lines;
use chatcell::presentation::{MessageCellRenderer, Navigator, Screen, Transition};

const OUTPUT_WIDTH: usize = 72;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, Option<StorageManager>)> {
    let storage = match StorageManager::new() {
        Ok(storage) => Some(storage),
        Err(e) => {
            eprintln!("warning: {e}, using default configuration");
            None
        }
    };

    let mut config = match &storage {
        Some(storage) => storage.load_config(args.config.as_deref())?,
        None => AppConfig::default(),
    };
    config.merge_with_args(args);

    Ok((config, storage))
}

fn resolve_snapshot(command: &Command, storage: Option<&StorageManager>) -> Result<PathBuf> {
    let state = storage
        .map(StorageManager::load_state)
        .transpose()?
        .unwrap_or_default();

    let path = command
        .snapshot()
        .cloned()
        .or(state.last_snapshot)
        .ok_or_else(|| eyre!("no snapshot file given and none used before"))?;

    if let Some(storage) = storage {
        let state = StateConfig {
            last_snapshot: Some(path.clone()),
        };
        if let Err(e) = storage.save_state(&state) {
            warn!(error = %e, "Failed to remember snapshot path");
        }
    }

    Ok(path)
}

struct Output<'a> {
    config: &'a AppConfig,
}

impl Output<'_> {
    fn descriptors(&self, descriptors: &[ItemDescriptor]) -> Result<()> {
        match self.config.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(descriptors)?),
            OutputFormat::Text => {
                let renderer = MessageCellRenderer::new(&self.config.ui.timestamp_format);
                for line in aligned_lines(&renderer.render_all(descriptors), OUTPUT_WIDTH) {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }

    fn value<T: Serialize + std::fmt::Debug>(&self, value: &T) -> Result<()> {
        match self.config.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => println!("{value:#?}"),
        }
        Ok(())
    }
}

fn run(args: &CliArgs, config: &AppConfig, storage: Option<&StorageManager>) -> Result<()> {
    let path = resolve_snapshot(&args.command, storage)?;
    let defaults = SnapshotDefaults {
        channel: config.channel,
        show_statuses: config.ui.show_statuses,
    };
    let presenter = SnapshotPresenter::load(&path, defaults)?;
    let describe =
        DescribeChannelUseCase::new().with_deleted_text(config.ui.deleted_message_text.clone());
    let mut navigator = Navigator::new(presenter.channel().id().clone());
    let output = Output { config };

    match &args.command {
        Command::Render { .. } => {
            output.descriptors(&describe.execute(Some(&presenter), Utc::now()))?;
        }
        Command::Tap {
            message,
            attachment,
            action,
            open,
            ..
        } => {
            let message = presenter.find_message(&MessageId::from(message.as_str()))?;
            let cell_action = match action {
                Some(action) => GesturePolicy::on_action_button(message, *attachment, *action),
                None => GesturePolicy::on_attachment(message, *attachment),
            };
            let Some(cell_action) = cell_action else {
                bail!("nothing to open for attachment {attachment} of message {}", message.id());
            };

            let transition = navigator.apply(cell_action);
            output.value(&transition)?;

            if *open && let Transition::Pushed(Screen::WebView { url, .. }) = &transition {
                UrlOpener::open(url)?;
            }
        }
        Command::Gesture { message, kind, .. } => {
            let message = presenter.find_message(&MessageId::from(message.as_str()))?;
            let gesture = match kind {
                GestureArg::Tap => Gesture::Tap,
                GestureArg::LongPress => Gesture::LongPress,
            };
            let Some(cell_action) =
                GesturePolicy::on_gesture(message, presenter.channel().config(), gesture)
            else {
                bail!("message {} does not accept {gesture:?}", message.id());
            };
            output.value(&navigator.apply(cell_action))?;
        }
        Command::Replies { message, .. } => {
            let id = MessageId::from(message.as_str());
            let items = presenter.items();
            let Some(index) = items
                .iter()
                .position(|item| item.as_message().is_some_and(|m| m.id() == &id))
            else {
                bail!("message {id} is not part of the channel list");
            };

            let descriptors = describe.execute(Some(&presenter), Utc::now());
            let cell = descriptors
                .iter()
                .filter_map(ItemDescriptor::as_cell)
                .find(|cell| cell.message_id == id);
            let Some(CellAction::ShowReplies { message_id }) =
                cell.and_then(GesturePolicy::on_reply_counter)
            else {
                bail!("message {id} has no replies to open");
            };

            let Some(Item::Message(parent)) = items.get(index) else {
                bail!("message {id} is not part of the channel list");
            };
            let Some(context) = OpenRepliesUseCase::new().execute(Some(&presenter), parent) else {
                bail!("no channel presenter to open replies from");
            };

            navigator.apply(CellAction::ShowReplies { message_id });
            let thread = presenter.thread(context);
            output.descriptors(&describe.execute(Some(&thread), Utc::now()))?;
        }
    }

    info!(depth = navigator.depth(), "Done");
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, storage) = load_config(&args)?;

    init_logging(&config)?;

    info!(version = chatcell::VERSION, "Starting chatcell");

    run(&args, &config, storage.as_ref())
}
