// 🖨️ Grouped Report - One header per category run, one line per account
//
// Input must already be sorted (see ordering.rs): the reporter only
// watches for the category to change between neighbours.
//
// Lines are built as styled spans first and turned into text last, so the
// same report can be printed with or without ANSI colors.

use crate::entities::{AssetCategory, UnifiedAccount};
use crossterm::style::{Attribute, Color, ContentStyle, Stylize};
use std::fmt;

// ============================================================================
// TONES
// ============================================================================

/// Visual treatment of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Positive holdings (green)
    Success,
    /// Debts (red)
    Warning,
    /// Securities and misc assets (blue)
    Info,
    /// Physical property (magenta)
    Accent,
    /// Crypto (yellow)
    Highlight,
    /// Account names
    Primary,
    /// Balance and currency
    Muted,
}

impl Tone {
    pub fn style(&self) -> ContentStyle {
        let style = ContentStyle::new();
        match self {
            Tone::Success => style.with(Color::Green),
            Tone::Warning => style.with(Color::Red),
            Tone::Info => style.with(Color::Blue),
            Tone::Accent => style.with(Color::Magenta),
            Tone::Highlight => style.with(Color::Yellow),
            Tone::Primary => style.attribute(Attribute::Bold),
            Tone::Muted => style.with(Color::DarkGrey),
        }
    }
}

/// Header tone per category. Several categories share a tone on purpose.
pub const CATEGORY_TONES: [(AssetCategory, Tone); 10] = [
    (AssetCategory::Cash, Tone::Success),
    (AssetCategory::Credit, Tone::Warning),
    (AssetCategory::Investment, Tone::Info),
    (AssetCategory::RealEstate, Tone::Accent),
    (AssetCategory::Loan, Tone::Warning),
    (AssetCategory::Vehicle, Tone::Accent),
    (AssetCategory::Cryptocurrency, Tone::Highlight),
    (AssetCategory::EmployeeCompensation, Tone::Info),
    (AssetCategory::OtherAsset, Tone::Info),
    (AssetCategory::OtherLiability, Tone::Warning),
];

pub fn tone_for(category: AssetCategory) -> Tone {
    CATEGORY_TONES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, tone)| *tone)
        .unwrap_or(Tone::Primary)
}

// ============================================================================
// LINES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Option<Tone>,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Span { text: text.into(), tone: None }
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Span { text: text.into(), tone: Some(tone) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Header(AssetCategory),
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub spans: Vec<Span>,
}

impl ReportLine {
    pub fn blank() -> Self {
        ReportLine { kind: LineKind::Blank, spans: Vec::new() }
    }

    pub fn header(category: AssetCategory) -> Self {
        ReportLine {
            kind: LineKind::Header(category),
            spans: vec![Span::styled(
                format!("--- {} ---", category.label()),
                tone_for(category),
            )],
        }
    }

    pub fn detail(account: &UnifiedAccount) -> Self {
        let amount = format!(
            "{} {}",
            format_balance(&account.balance),
            account.currency.to_uppercase()
        );

        ReportLine {
            kind: LineKind::Detail,
            spans: vec![
                Span::raw("  "),
                Span::styled(account.name.clone(), Tone::Primary),
                Span::raw(": "),
                Span::styled(amount, Tone::Muted),
            ],
        }
    }

    /// Text with styling stripped
    pub fn plain(&self) -> String {
        self.render(ColorMode::Never)
    }

    pub fn render(&self, mode: ColorMode) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match (mode, span.tone) {
                (ColorMode::Always, Some(tone)) => {
                    out.push_str(&tone.style().apply(span.text.as_str()).to_string());
                }
                _ => out.push_str(&span.text),
            }
        }
        out
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

// ============================================================================
// GROUPING
// ============================================================================

/// Build the report for an already-sorted slice. Empty in, empty out.
pub fn render_grouped(accounts: &[UnifiedAccount]) -> Vec<ReportLine> {
    let mut lines = Vec::new();
    let mut current: Option<AssetCategory> = None;

    for (index, account) in accounts.iter().enumerate() {
        if current != Some(account.category) {
            if index > 0 {
                lines.push(ReportLine::blank());
            }
            lines.push(ReportLine::header(account.category));
            current = Some(account.category);
        }
        lines.push(ReportLine::detail(account));
    }

    lines
}

/// Size of each contiguous category run, in order
pub fn category_runs(accounts: &[UnifiedAccount]) -> Vec<(AssetCategory, usize)> {
    let mut runs: Vec<(AssetCategory, usize)> = Vec::new();
    for account in accounts {
        match runs.last_mut() {
            Some((category, count)) if *category == account.category => *count += 1,
            _ => runs.push((account.category, 1)),
        }
    }
    runs
}

// ============================================================================
// BALANCE FORMATTING
// ============================================================================

/// Lenient decimal parse: leading whitespace skipped, longest numeric
/// prefix used, trailing junk ignored. No digits at all → NaN.
pub fn parse_balance(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts if it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// At or above this magnitude the display switches to exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Whole-unit display: half away from zero, no "-0".
/// Magnitudes of 1e21 and up print as `1e+21`, `-1.5e+30`.
pub fn format_balance(raw: &str) -> String {
    let value = parse_balance(raw);

    if value.is_nan() {
        log::warn!("balance {:?} is not a number", raw);
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }

    if value.abs() >= EXPONENT_THRESHOLD {
        return exponent_form(value);
    }

    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

// ============================================================================
// TESTS
// ============================================================================
