//! Renders item descriptors into styled terminal lines.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::application::dto::{
    ActivityDescriptor, AttachmentClass, AttachmentDescriptor, Body, CellDescriptor, Direction,
    ItemDescriptor, Padding, ReactionBadge,
};

const GUTTER_START: &str = "╭ ";
const GUTTER_CONTINUED: &str = "│ ";
const FALLBACK_TIMESTAMP_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone)]
pub struct MessageCellStyle {
    pub author_style: Style,
    pub timestamp_style: Style,
    pub content_style: Style,
    pub mention_style: Style,
    pub info_style: Style,
    pub ephemeral_style: Style,
    pub attachment_style: Style,
    pub action_style: Style,
    pub reply_style: Style,
    pub reaction_style: Style,
    pub own_reaction_style: Style,
    pub status_style: Style,
    pub status_highlighted_style: Style,
    pub loading_style: Style,
    pub gutter_style: Style,
}

impl Default for MessageCellStyle {
    fn default() -> Self {
        Self {
            author_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            timestamp_style: Style::default().fg(Color::DarkGray),
            content_style: Style::default().fg(Color::White),
            mention_style: Style::default().fg(Color::White).bg(Color::Blue),
            info_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            ephemeral_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
            attachment_style: Style::default().fg(Color::Blue),
            action_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            reply_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            reaction_style: Style::default().fg(Color::Gray),
            own_reaction_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_style: Style::default().fg(Color::DarkGray),
            status_highlighted_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            loading_style: Style::default().fg(Color::Yellow),
            gutter_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Turns descriptors into lines; outgoing cells are right aligned.
pub struct MessageCellRenderer {
    style: MessageCellStyle,
    timestamp_format: String,
}

impl MessageCellRenderer {
    #[must_use]
    pub fn new(timestamp_format: impl Into<String>) -> Self {
        Self {
            style: MessageCellStyle::default(),
            timestamp_format: timestamp_format.into(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: MessageCellStyle) -> Self {
        self.style = style;
        self
    }

    /// Renders a whole list.
    #[must_use]
    pub fn render_all(&self, descriptors: &[ItemDescriptor]) -> Text<'static> {
        Text::from(
            descriptors
                .iter()
                .flat_map(|descriptor| self.render(descriptor))
                .collect::<Vec<_>>(),
        )
    }

    #[must_use]
    pub fn render(&self, descriptor: &ItemDescriptor) -> Vec<Line<'static>> {
        match descriptor {
            ItemDescriptor::Loading => {
                vec![Line::from(Span::styled("Loading…", self.style.loading_style)).centered()]
            }
            ItemDescriptor::Status {
                title,
                subtitle,
                highlighted,
            } => {
                let style = if *highlighted {
                    self.style.status_highlighted_style
                } else {
                    self.style.status_style
                };
                let text = match subtitle {
                    Some(subtitle) => format!("── {title} · {subtitle} ──"),
                    None => format!("── {title} ──"),
                };
                vec![Line::from(Span::styled(text, style)).centered(), Line::default()]
            }
            ItemDescriptor::Message(cell) => self.render_cell(cell),
            ItemDescriptor::Activity(activity) => self.render_activity(activity),
        }
    }

    fn render_cell(&self, cell: &CellDescriptor) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(header) = &cell.header {
            lines.push(Line::from(vec![
                Span::styled(header.name.clone(), self.style.author_style),
                Span::raw(" "),
                Span::styled(self.timestamp(&header.date), self.style.timestamp_style),
            ]));
        }

        let gutter = if cell.background_continued {
            GUTTER_CONTINUED
        } else {
            GUTTER_START
        };

        match &cell.body {
            Body::Deleted { info_text, .. } => {
                lines.push(self.gutter_line(gutter, vec![Span::styled(
                    info_text.clone(),
                    self.style.info_style,
                )]));
            }
            Body::Ephemeral { args_text } => {
                lines.push(self.gutter_line(gutter, vec![Span::styled(
                    args_text.clone(),
                    self.style.ephemeral_style,
                )]));
            }
            Body::Normal {
                text,
                mentioned_user_names,
            } => {
                if text.is_empty() {
                    lines.push(self.gutter_line(gutter, Vec::new()));
                }
                for text_line in text.lines() {
                    lines.push(self.gutter_line(
                        gutter,
                        self.highlight_mentions(text_line, mentioned_user_names),
                    ));
                }
            }
        }

        for attachment in &cell.attachments {
            lines.extend(self.render_attachment(attachment));
        }

        if cell.show_reply_affordance {
            let label = if cell.reply_count == 1 {
                "1 reply".to_string()
            } else {
                format!("{} replies", cell.reply_count)
            };
            lines.push(Line::from(Span::styled(
                format!("↳ {label}"),
                self.style.reply_style,
            )));
        }

        if let Some(reactions) = cell.reactions.as_deref().filter(|r| !r.is_empty()) {
            lines.push(self.render_reactions(reactions));
        }

        if cell.padding == Padding::Regular {
            lines.push(Line::default());
        }

        align(lines, cell.direction)
    }

    /// Formats `date` with the configured format, or `%H:%M` if that format is invalid.
    fn timestamp(&self, date: &DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.timestamp_format)).is_ok() {
            return out;
        }
        date.format(FALLBACK_TIMESTAMP_FORMAT).to_string()
    }

    fn render_activity(&self, activity: &ActivityDescriptor) -> Vec<Line<'static>> {
        let lines = vec![
            Line::from(vec![
                Span::styled(activity.name.clone(), self.style.author_style),
                Span::raw(" "),
                Span::styled(self.timestamp(&activity.date), self.style.timestamp_style),
            ]),
            self.gutter_line(GUTTER_START, vec![Span::styled(
                activity.info_text.clone(),
                self.style.info_style,
            )]),
            Line::default(),
        ];
        align(lines, activity.direction)
    }

    fn render_attachment(&self, attachment: &AttachmentDescriptor) -> Vec<Line<'static>> {
        let icon = match attachment.class {
            AttachmentClass::ImageOrVideo => "🖼",
            AttachmentClass::Other => "🔗",
        };
        let mut spans = vec![Span::styled(
            format!("{icon} {}", attachment.title),
            self.style.attachment_style,
        )];
        if attachment.logo.is_some() {
            spans.push(Span::styled(" GIPHY", self.style.timestamp_style));
        }

        let mut lines = vec![self.gutter_line(GUTTER_CONTINUED, spans)];

        if !attachment.actions.is_empty() {
            let mut buttons = Vec::new();
            for action in &attachment.actions {
                buttons.push(Span::styled(
                    format!("[{}]", action.text),
                    self.style.action_style,
                ));
                buttons.push(Span::raw(" "));
            }
            buttons.pop();
            lines.push(self.gutter_line(GUTTER_CONTINUED, buttons));
        }

        lines
    }

    fn render_reactions(&self, reactions: &[ReactionBadge]) -> Line<'static> {
        let mut spans = Vec::new();
        for badge in reactions {
            let style = if badge.own {
                self.style.own_reaction_style
            } else {
                self.style.reaction_style
            };
            spans.push(Span::styled(format!("{} {}", badge.emoji, badge.count), style));
            spans.push(Span::raw("  "));
        }
        spans.pop();
        Line::from(spans)
    }

    fn gutter_line(&self, gutter: &'static str, mut spans: Vec<Span<'static>>) -> Line<'static> {
        spans.insert(0, Span::styled(gutter, self.style.gutter_style));
        Line::from(spans)
    }

    /// Splits `text` so every `@name` of a mentioned user gets the mention style.
    fn highlight_mentions(&self, text: &str, names: &[String]) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let mut rest = text;

        loop {
            let next = names
                .iter()
                .filter(|name| !name.is_empty())
                .filter_map(|name| {
                    let needle = format!("@{name}");
                    rest.find(&needle).map(|pos| (pos, needle.len()))
                })
                .min_by_key(|(pos, _)| *pos);

            let Some((pos, len)) = next else {
                break;
            };
            if pos > 0 {
                spans.push(Span::styled(rest[..pos].to_string(), self.style.content_style));
            }
            spans.push(Span::styled(
                rest[pos..pos + len].to_string(),
                self.style.mention_style,
            ));
            rest = &rest[pos + len..];
        }

        if !rest.is_empty() || spans.is_empty() {
            spans.push(Span::styled(rest.to_string(), self.style.content_style));
        }
        spans
    }
}

fn align(lines: Vec<Line<'static>>, direction: Direction) -> Vec<Line<'static>> {
    let alignment = match direction {
        Direction::Incoming => Alignment::Left,
        Direction::Outgoing => Alignment::Right,
    };
    lines
        .into_iter()
        .map(|line| line.alignment(alignment))
        .collect()
}

/// Flattens lines to plain strings, dropping styles and alignment.
#[must_use]
pub fn plain_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect()
}

/// Flattens lines to strings padded to `width` columns according to each
/// line's alignment.
#[must_use]
pub fn aligned_lines(text: &Text<'_>, width: usize) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| {
            let content: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            let padding = width.saturating_sub(line.width());
            match line.alignment {
                Some(Alignment::Right) => format!("{}{content}", " ".repeat(padding)),
                Some(Alignment::Center) => format!("{}{content}", " ".repeat(padding / 2)),
                _ => content,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{MessagePresentationService, PresentationContext};
    use crate::domain::entities::{
        Attachment, AttachmentAction, AttachmentKind, ChannelConfig, Item, Message, MessageKind,
        User,
    };
    use chrono::{TimeZone, Utc};

    fn describe(items: &[Item]) -> Vec<ItemDescriptor> {
        let service =
            MessagePresentationService::new(PresentationContext::new(ChannelConfig::default(), false));
        let now = Utc.with_ymd_and_hms(2024, 5, 4, 13, 0, 0).unwrap();
        (0..items.len())
            .filter_map(|index| service.describe_item(index, items, now))
            .collect()
    }

    fn message(id: &str, user: &User, text: &str) -> Message {
        Message::new(
            id,
            user.clone(),
            text,
            Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0).unwrap(),
        )
    }

    fn render(items: &[Item]) -> Vec<String> {
        let renderer = MessageCellRenderer::new("%H:%M");
        plain_lines(&renderer.render_all(&describe(items)))
    }

    #[test]
    fn test_header_only_on_last_of_run() {
        let alice = User::new("u1", "Alice");
        let lines = render(&[
            Item::from(message("a", &alice, "hi")),
            Item::from(message("b", &alice, "there")),
        ]);

        assert_eq!(
            lines,
            vec![
                "╭ hi".to_string(),
                "Alice 12:30".to_string(),
                "│ there".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_reply_counter_and_reactions() {
        let alice = User::new("u1", "Alice");
        let lines = render(&[Item::from(
            message("a", &alice, "lunch?")
                .with_reply_count(2)
                .with_reaction("like", 3),
        )]);

        assert!(lines.contains(&"↳ 2 replies".to_string()));
        assert!(lines.contains(&"👍 3".to_string()));
    }

    #[test]
    fn test_ephemeral_actions_rendered() {
        let bob = User::new("u2", "Bob").with_current(true);
        let giphy = Attachment::new(AttachmentKind::Giphy, "cats").with_actions(vec![
            AttachmentAction::new("image_action", "send", "Send"),
            AttachmentAction::new("image_action", "cancel", "Cancel"),
        ]);
        let descriptors = describe(&[Item::from(
            message("a", &bob, "")
                .with_kind(MessageKind::Ephemeral)
                .with_args("/giphy cats")
                .with_attachments(vec![giphy]),
        )]);
        let lines = MessageCellRenderer::new("%H:%M").render(&descriptors[0]);
        let plain = plain_lines(&Text::from(lines.clone()));

        assert!(plain.contains(&"╭ /giphy cats".to_string()));
        assert!(plain.contains(&"│ 🖼 cats GIPHY".to_string()));
        assert!(plain.contains(&"│ [Send] [Cancel]".to_string()));
        assert!(lines.iter().all(|l| l.alignment == Some(Alignment::Right)));
    }

    #[test]
    fn test_mentions_highlighted() {
        let renderer = MessageCellRenderer::new("%H:%M");
        let spans = renderer.highlight_mentions("hey @Bob and @Carol!", &["Bob".to_string(), "Carol".to_string()]);
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(contents, vec!["hey ", "@Bob", " and ", "@Carol", "!"]);
        assert_eq!(spans[1].style, renderer.style.mention_style);
    }

    #[test]
    fn test_status_and_loading() {
        let lines = render(&[
            Item::Loading,
            Item::Status {
                title: "Today".into(),
                subtitle: Some("May 4".into()),
                highlighted: true,
            },
        ]);

        assert_eq!(lines[0], "Loading…");
        assert_eq!(lines[1], "── Today · May 4 ──");
    }

    #[test]
    fn test_aligned_lines_pads_outgoing() {
        let text = Text::from(vec![
            Line::from("in"),
            Line::from("out").right_aligned(),
            Line::from("mid").centered(),
        ]);

        assert_eq!(
            aligned_lines(&text, 10),
            vec!["in".to_string(), "       out".to_string(), "   mid".to_string()]
        );
    }

    #[test]
    fn test_invalid_timestamp_format_falls_back() {
        let alice = User::new("u1", "Alice");
        let descriptors = describe(&[Item::from(message("a", &alice, "hi"))]);
        let lines = MessageCellRenderer::new("%Q").render(&descriptors[0]);

        assert_eq!(
            plain_lines(&Text::from(lines)),
            vec!["Alice 12:30".to_string(), "╭ hi".to_string(), String::new()]
        );
    }

    #[test]
    fn test_empty_text_keeps_bubble_line() {
        let alice = User::new("u1", "Alice");
        let lines = render(&[Item::from(message("a", &alice, ""))]);

        assert_eq!(
            lines,
            vec!["Alice 12:30".to_string(), "╭ ".to_string(), String::new()]
        );
    }

    #[test]
    fn test_deleted_message_line() {
        let alice = User::new("u1", "Alice");
        let lines = render(&[Item::from(
            message("a", &alice, "x").with_deleted(Utc::now()),
        )]);

        assert_eq!(lines[1], "╭ This message was deleted.");
    }
}
