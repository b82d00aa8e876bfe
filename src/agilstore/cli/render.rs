//! # Rendering
//!
//! Every function here returns a `String`; the caller decides where it goes (the
//! menu session or stdout). Column layout is computed on display width, so names with
//! accents or wide characters keep the table aligned.

use agilstore::api::{CmdMessage, MessageLevel};
use agilstore::config::StoreConfig;
use agilstore::model::Product;
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 15;
const QTY_WIDTH: usize = 5;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    pub currency: String,
}

impl RenderOptions {
    pub fn new(color: bool, currency: impl Into<String>) -> Self {
        Self {
            color,
            currency: currency.into(),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn format_price(price: f64, currency: &str) -> String {
    format!("{} {:.2}", currency, price)
}

pub fn render_messages(messages: &[CmdMessage], opts: &RenderOptions) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => opts.paint(&message.content, |s| s.dimmed()),
            MessageLevel::Success => opts.paint(&message.content, |s| s.green()),
            MessageLevel::Warning => opts.paint(&message.content, |s| s.yellow()),
            MessageLevel::Error => opts.paint(&message.content, |s| s.red()),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_product_table(products: &[Product], opts: &RenderOptions) -> String {
    if products.is_empty() {
        return String::new();
    }

    let header = format!(
        "{} | {} | {} | {} | PRICE",
        fit("ID", ID_WIDTH),
        fit("NAME", NAME_WIDTH),
        fit("CATEGORY", CATEGORY_WIDTH),
        fit("QTY", QTY_WIDTH),
    );
    let rule = format!(
        "{}-|-{}-|-{}-|-{}-|-{}",
        "-".repeat(ID_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(CATEGORY_WIDTH),
        "-".repeat(QTY_WIDTH),
        "-".repeat(10),
    );

    let mut out = String::new();
    out.push_str(&opts.paint(&header, |s| s.bold()));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for product in products {
        out.push_str(&format!(
            "{} | {} | {} | {} | {}\n",
            opts.paint(&fit(&product.id.to_string(), ID_WIDTH), |s| s.yellow()),
            fit(&product.name, NAME_WIDTH),
            fit(&product.category, CATEGORY_WIDTH),
            fit(&product.quantity.to_string(), QTY_WIDTH),
            format_price(product.price, &opts.currency),
        ));
    }
    out
}

pub fn render_product_details(product: &Product, opts: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&opts.paint("PRODUCT DETAILS", |s| s.bold()));
    out.push('\n');
    out.push_str("=====================\n");
    out.push_str(&format!("ID: {}\n", product.id));
    out.push_str(&format!("Name: {}\n", product.name));
    out.push_str(&format!("Category: {}\n", product.category));
    out.push_str(&format!("Quantity in stock: {}\n", product.quantity));
    out.push_str(&format!(
        "Price: {}\n",
        format_price(product.price, &opts.currency)
    ));
    out
}

/// One-line summary, used before update and delete prompts.
pub fn render_product_summary(product: &Product, opts: &RenderOptions) -> String {
    format!(
        "{} - {} - {} un - {}",
        product.name,
        product.category,
        product.quantity,
        format_price(product.price, &opts.currency)
    )
}

pub fn render_config(config: &StoreConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

/// Pads or truncates `s` to exactly `width` display columns.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
