use crate::event::GovUpdate;
use crate::traits::ParseMode;
use crate::types::{Bill, ExecutiveOrder, ServiceMessage};

pub const CONNECTED_NOTICE: &str = "Bot connected to this chat";

/// Rendered message body plus the parse mode it was written for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub text: String,
    pub parse_mode: ParseMode,
}

pub fn render(update: &GovUpdate) -> RenderedMessage {
    match update {
        GovUpdate::ExecutiveOrder(order) => RenderedMessage {
            text: render_executive_order(order),
            parse_mode: ParseMode::Html,
        },
        GovUpdate::Bill(bill) => RenderedMessage {
            text: render_bill(bill),
            parse_mode: ParseMode::Html,
        },
        GovUpdate::ServiceMessage(notice) => RenderedMessage {
            text: render_service_message(notice),
            parse_mode: ParseMode::Plain,
        },
    }
}

pub fn render_executive_order(order: &ExecutiveOrder) -> String {
    format!(
        "<b>Executive Order {} was Just Signed</b>\n\
         <i>{}</i>\n\
         Signed On: {}\n\
         <a href=\"{}\">Click for More</a>",
        order.executive_order_number,
        escape_html(&order.title),
        escape_html(order.signing_date.as_deref().unwrap_or("unknown")),
        escape_html(&order.html_url),
    )
}

pub fn render_bill(bill: &Bill) -> String {
    let mut text = format!(
        "<b>New Update to Bill {}</b>\n\
         <i>{}</i>\n\
         Last Major Action: {}\n\
         Date: {}",
        escape_html(&bill.number),
        escape_html(&bill.title),
        escape_html(bill.latest_major_action.as_deref().unwrap_or("none")),
        escape_html(bill.latest_major_action_date.as_deref().unwrap_or("unknown")),
    );

    if let Some(link) = bill.link() {
        text.push_str(&format!("\n<a href=\"{}\">Click for More</a>", escape_html(link)));
    }

    text
}

pub fn render_service_message(notice: &ServiceMessage) -> String {
    format!(
        "SERVICE MESSAGE\n\n{}\nREPORTED: {}",
        notice.message,
        notice.time.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Escapes text for Telegram's HTML mode, including inside `href` attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
