use crate::config::TailwindConfig;
use crate::errors::{RemapError, Result};
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::CssRule as LcssRule;
use lightningcss::rules::CssRuleList;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A converted CSS rule: the rule's selectors plus the Tailwind utility
/// classes its declarations translate to.
#[derive(Debug, Clone)]
pub struct ConvertedRule {
    /// Selector strings, as written in the stylesheet (e.g. `.btn`, `#header`)
    pub selectors: Vec<String>,

    /// Ordered list of equivalent Tailwind utility classes
    pub tailwind_classes: Vec<String>,
}

/// Built-in color palette subset (CSS value -> Tailwind color token).
/// Values are the minified hex forms lightningcss prints.
static COLOR_PALETTE: &[(&str, &str)] = &[
    ("#fff", "white"),
    ("#ffffff", "white"),
    ("white", "white"),
    ("#000", "black"),
    ("#000000", "black"),
    ("black", "black"),
    ("transparent", "transparent"),
    ("currentcolor", "current"),
    ("#f9fafb", "gray-50"),
    ("#f3f4f6", "gray-100"),
    ("#e5e7eb", "gray-200"),
    ("#d1d5db", "gray-300"),
    ("#9ca3af", "gray-400"),
    ("#6b7280", "gray-500"),
    ("#4b5563", "gray-600"),
    ("#374151", "gray-700"),
    ("#1f2937", "gray-800"),
    ("#111827", "gray-900"),
    ("#1e293b", "slate-800"),
    ("#ef4444", "red-500"),
    ("#dc2626", "red-600"),
    ("#f97316", "orange-500"),
    ("#f59e0b", "amber-500"),
    ("#facc15", "yellow-400"),
    ("#22c55e", "green-500"),
    ("#16a34a", "green-600"),
    ("#10b981", "emerald-500"),
    ("#14b8a6", "teal-500"),
    ("#0ea5e9", "sky-500"),
    ("#3b82f6", "blue-500"),
    ("#2563eb", "blue-600"),
    ("#1d4ed8", "blue-700"),
    ("#6366f1", "indigo-500"),
    ("#a855f7", "purple-500"),
    ("#ec4899", "pink-500"),
];

/// Pseudo-class / pseudo-element -> Tailwind variant prefix
static VARIANT_MAP: &[(&str, &str)] = &[
    ("hover", "hover"),
    ("focus", "focus"),
    ("focus-within", "focus-within"),
    ("focus-visible", "focus-visible"),
    ("active", "active"),
    ("visited", "visited"),
    ("checked", "checked"),
    ("disabled", "disabled"),
    ("required", "required"),
    ("valid", "valid"),
    ("invalid", "invalid"),
    ("empty", "empty"),
    ("first-child", "first"),
    ("last-child", "last"),
    ("only-child", "only"),
    ("before", "before"),
    ("after", "after"),
    ("placeholder", "placeholder"),
    ("selection", "selection"),
    ("marker", "marker"),
    ("first-letter", "first-letter"),
    ("first-line", "first-line"),
];

/// `min-width` breakpoint (px) -> responsive variant prefix
static BREAKPOINT_MAP: &[(&str, &str)] = &[
    ("640", "sm"),
    ("768", "md"),
    ("1024", "lg"),
    ("1280", "xl"),
    ("1536", "2xl"),
];

/// Converts compiled CSS rules into Tailwind utility class records.
///
/// This is the collaborator the analysis pipeline consumes: it owns the
/// declaration-to-utility mapping and knows nothing about the HTML document.
pub struct TailwindConverter {
    /// Reverse lookup of custom theme colors (CSS value -> name)
    color_lookup: HashMap<String, String>,

    /// Reverse lookup of custom theme spacing (CSS value -> name)
    spacing_lookup: HashMap<String, String>,

    /// Emit `[prop:value]` arbitrary-property classes for unmapped declarations
    arbitrary_properties: bool,
}

impl TailwindConverter {
    pub fn new(config: &TailwindConfig) -> Self {
        let color_lookup = config
            .theme
            .extend
            .colors
            .iter()
            .map(|(name, value)| (value.to_ascii_lowercase(), name.clone()))
            .collect();

        let spacing_lookup = config
            .theme
            .extend
            .spacing
            .iter()
            .map(|(name, value)| (value.clone(), name.clone()))
            .collect();

        Self {
            color_lookup,
            spacing_lookup,
            arbitrary_properties: true,
        }
    }

    /// Convert a raw CSS document into Tailwind rule records.
    ///
    /// Rules that translate to nothing are still emitted with an empty class
    /// list so callers see every selector the stylesheet defines.
    pub fn convert_css(&self, css: &str) -> Result<Vec<ConvertedRule>> {
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };

        let sheet = StyleSheet::parse(css, options).map_err(|e| RemapError::CssParse {
            message: e.to_string(),
        })?;

        let mut rules = Vec::new();
        self.walk_rules(&sheet.rules, None, &mut rules)?;
        Ok(rules)
    }

    fn walk_rules(
        &self,
        list: &CssRuleList,
        variant: Option<&str>,
        out: &mut Vec<ConvertedRule>,
    ) -> Result<()> {
        for rule in &list.0 {
            match rule {
                LcssRule::Style(style) => {
                    let classes = self.convert_declarations(style)?;

                    for selector in style.selectors.0.iter() {
                        let selector_text = selector
                            .to_css_string(PrinterOptions::default())
                            .map_err(|e| RemapError::CssParse {
                                message: e.to_string(),
                            })?;

                        let (base, mut prefixes) = split_selector_variants(&selector_text);
                        if let Some(v) = variant {
                            prefixes.insert(0, v.to_string());
                        }

                        let prefix = prefixes.concat();
                        let tailwind_classes = classes
                            .iter()
                            .map(|c| format!("{}{}", prefix, c))
                            .collect();

                        out.push(ConvertedRule {
                            selectors: vec![base],
                            tailwind_classes,
                        });
                    }
                }
                LcssRule::Media(media) => {
                    let query = media
                        .query
                        .to_css_string(PrinterOptions::default())
                        .map_err(|e| RemapError::CssParse {
                            message: e.to_string(),
                        })?;

                    // Only breakpoint and dark-mode queries translate; anything
                    // else has no Tailwind counterpart and is skipped whole.
                    if let Some(v) = media_variant(&query) {
                        let nested = if let Some(outer) = variant {
                            format!("{}{}", outer, v)
                        } else {
                            v
                        };
                        self.walk_rules(&media.rules, Some(&nested), out)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn convert_declarations(
        &self,
        style: &lightningcss::rules::style::StyleRule,
    ) -> Result<Vec<String>> {
        let mut classes = Vec::new();

        let all = style
            .declarations
            .declarations
            .iter()
            .chain(style.declarations.important_declarations.iter());

        for property in all {
            let name = property.property_id().name().to_string();
            let value = property
                .value_to_css_string(PrinterOptions::default())
                .map_err(|e| RemapError::CssParse {
                    message: e.to_string(),
                })?;

            classes.extend(self.declaration_to_classes(&name, &value));
        }

        Ok(classes)
    }

    /// Map a single `property: value` declaration to zero or more utilities.
    fn declaration_to_classes(&self, property: &str, value: &str) -> Vec<String> {
        // Minifying printers drop the leading zero of fractional lengths;
        // restore it so the exact-match tables see one canonical form.
        let owned;
        let value = if value.starts_with('.') {
            owned = format!("0{}", value.trim());
            owned.as_str()
        } else {
            value.trim()
        };

        let single = |c: String| vec![c];

        match property {
            "display" => match value {
                "none" => single("hidden".into()),
                "flex" | "grid" | "block" | "inline" | "inline-block" | "inline-flex"
                | "inline-grid" | "table" | "contents" | "flow-root" => single(value.into()),
                _ => self.arbitrary(property, value),
            },
            "position" => match value {
                "static" | "fixed" | "absolute" | "relative" | "sticky" => single(value.into()),
                _ => self.arbitrary(property, value),
            },
            "visibility" => match value {
                "visible" => single("visible".into()),
                "hidden" => single("invisible".into()),
                "collapse" => single("collapse".into()),
                _ => self.arbitrary(property, value),
            },
            "text-align" => match value {
                "left" | "center" | "right" | "justify" => single(format!("text-{}", value)),
                _ => self.arbitrary(property, value),
            },
            "font-weight" => match font_weight_name(value) {
                Some(name) => single(format!("font-{}", name)),
                None => self.arbitrary(property, value),
            },
            "font-style" => match value {
                "italic" => single("italic".into()),
                "normal" => single("not-italic".into()),
                _ => self.arbitrary(property, value),
            },
            "font-size" => match font_size_name(value) {
                Some(name) => single(format!("text-{}", name)),
                None => single(format!("text-[{}]", bracket_value(value))),
            },
            "line-height" => single(self.line_height_class(value)),
            "letter-spacing" => match tracking_name(value) {
                Some(name) => single(format!("tracking-{}", name)),
                None => single(format!("tracking-[{}]", bracket_value(value))),
            },
            "text-transform" => match value {
                "uppercase" | "lowercase" | "capitalize" => single(value.into()),
                "none" => single("normal-case".into()),
                _ => self.arbitrary(property, value),
            },
            "text-decoration" | "text-decoration-line" => match value {
                "underline" | "overline" | "line-through" => single(value.into()),
                "none" => single("no-underline".into()),
                _ => self.arbitrary(property, value),
            },
            "white-space" => match value {
                "normal" | "nowrap" | "pre" | "pre-line" | "pre-wrap" => {
                    single(format!("whitespace-{}", value))
                }
                _ => self.arbitrary(property, value),
            },
            "color" => single(format!("text-{}", self.color_token(value))),
            "background-color" => single(format!("bg-{}", self.color_token(value))),
            "border-color" => single(format!("border-{}", self.color_token(value))),
            "margin" => self.box_shorthand('m', value),
            "padding" => self.box_shorthand('p', value),
            "margin-top" => self.sided_spacing("mt", value),
            "margin-right" => self.sided_spacing("mr", value),
            "margin-bottom" => self.sided_spacing("mb", value),
            "margin-left" => self.sided_spacing("ml", value),
            "margin-inline" => self.sided_spacing("mx", value),
            "margin-block" => self.sided_spacing("my", value),
            "padding-top" => self.sided_spacing("pt", value),
            "padding-right" => self.sided_spacing("pr", value),
            "padding-bottom" => self.sided_spacing("pb", value),
            "padding-left" => self.sided_spacing("pl", value),
            "padding-inline" => self.sided_spacing("px", value),
            "padding-block" => self.sided_spacing("py", value),
            "gap" => self.sided_spacing("gap", value),
            "row-gap" => self.sided_spacing("gap-y", value),
            "column-gap" => self.sided_spacing("gap-x", value),
            "top" => self.sided_spacing("top", value),
            "right" => self.sided_spacing("right", value),
            "bottom" => self.sided_spacing("bottom", value),
            "left" => self.sided_spacing("left", value),
            "inset" => self.sided_spacing("inset", value),
            "width" => single(self.sizing_class("w", value, true)),
            "height" => single(self.sizing_class("h", value, false)),
            "min-width" => single(self.sizing_class("min-w", value, true)),
            "min-height" => single(self.sizing_class("min-h", value, false)),
            "max-width" => single(self.sizing_class("max-w", value, true)),
            "max-height" => single(self.sizing_class("max-h", value, false)),
            "border-radius" => single(border_radius_class(value)),
            "border-width" => match value {
                "1px" => single("border".into()),
                "0" | "0px" => single("border-0".into()),
                "2px" => single("border-2".into()),
                "4px" => single("border-4".into()),
                "8px" => single("border-8".into()),
                _ => single(format!("border-[{}]", bracket_value(value))),
            },
            "border-style" => match value {
                "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => {
                    single(format!("border-{}", value))
                }
                _ => self.arbitrary(property, value),
            },
            "opacity" => match value.parse::<f32>() {
                Ok(n) => single(format!("opacity-{}", (n * 100.0).round() as i32)),
                Err(_) => self.arbitrary(property, value),
            },
            "overflow" | "overflow-x" | "overflow-y" => match value {
                "auto" | "hidden" | "visible" | "scroll" | "clip" => {
                    single(format!("{}-{}", property, value))
                }
                _ => self.arbitrary(property, value),
            },
            "cursor" => single(format!("cursor-{}", value)),
            "z-index" => match value {
                "auto" => single("z-auto".into()),
                v if v.starts_with('-') => single(format!("-z-{}", &v[1..])),
                v => single(format!("z-{}", v)),
            },
            "flex-direction" => match value {
                "row" => single("flex-row".into()),
                "row-reverse" => single("flex-row-reverse".into()),
                "column" => single("flex-col".into()),
                "column-reverse" => single("flex-col-reverse".into()),
                _ => self.arbitrary(property, value),
            },
            "flex-wrap" => match value {
                "wrap" => single("flex-wrap".into()),
                "wrap-reverse" => single("flex-wrap-reverse".into()),
                "nowrap" => single("flex-nowrap".into()),
                _ => self.arbitrary(property, value),
            },
            "flex" => match value {
                "1 1 0%" | "1" => single("flex-1".into()),
                "1 1 auto" | "auto" => single("flex-auto".into()),
                "0 1 auto" | "initial" => single("flex-initial".into()),
                "none" => single("flex-none".into()),
                _ => self.arbitrary(property, value),
            },
            "flex-grow" => match value {
                "1" => single("grow".into()),
                "0" => single("grow-0".into()),
                _ => self.arbitrary(property, value),
            },
            "flex-shrink" => match value {
                "1" => single("shrink".into()),
                "0" => single("shrink-0".into()),
                _ => self.arbitrary(property, value),
            },
            "align-items" => match value {
                "center" => single("items-center".into()),
                "flex-start" | "start" => single("items-start".into()),
                "flex-end" | "end" => single("items-end".into()),
                "baseline" => single("items-baseline".into()),
                "stretch" => single("items-stretch".into()),
                _ => self.arbitrary(property, value),
            },
            "justify-content" => match value {
                "center" => single("justify-center".into()),
                "flex-start" | "start" => single("justify-start".into()),
                "flex-end" | "end" => single("justify-end".into()),
                "space-between" => single("justify-between".into()),
                "space-around" => single("justify-around".into()),
                "space-evenly" => single("justify-evenly".into()),
                _ => self.arbitrary(property, value),
            },
            "object-fit" => match value {
                "contain" | "cover" | "fill" | "none" | "scale-down" => {
                    single(format!("object-{}", value))
                }
                _ => self.arbitrary(property, value),
            },
            "user-select" => match value {
                "none" | "text" | "all" | "auto" => single(format!("select-{}", value)),
                _ => self.arbitrary(property, value),
            },
            "pointer-events" => match value {
                "none" => single("pointer-events-none".into()),
                "auto" => single("pointer-events-auto".into()),
                _ => self.arbitrary(property, value),
            },
            _ => self.arbitrary(property, value),
        }
    }

    fn arbitrary(&self, property: &str, value: &str) -> Vec<String> {
        // Custom properties and vendor prefixes have no utility form at all.
        if !self.arbitrary_properties || property.starts_with("--") || property.starts_with('-') {
            return Vec::new();
        }
        vec![format!("[{}:{}]", property, bracket_value(value))]
    }

    /// Resolve a length against the theme spacing scale.
    fn spacing_token(&self, value: &str) -> Option<String> {
        if let Some(name) = self.spacing_lookup.get(value) {
            return Some(name.clone());
        }

        match value {
            "0" | "0px" => Some("0".to_string()),
            "1px" => Some("px".to_string()),
            "auto" => Some("auto".to_string()),
            _ => {
                let rem: f32 = value.strip_suffix("rem")?.parse().ok()?;
                // The default scale is quarter-rem steps, halves allowed.
                let scale = rem * 4.0;
                if (scale * 2.0 - (scale * 2.0).round()).abs() < 1e-4 {
                    Some(format_scale(scale))
                } else {
                    None
                }
            }
        }
    }

    fn sided_spacing(&self, prefix: &str, value: &str) -> Vec<String> {
        vec![self.spacing_class(prefix, value)]
    }

    fn spacing_class(&self, prefix: &str, value: &str) -> String {
        if let Some(bare) = value.strip_prefix('-') {
            if let Some(token) = self.spacing_token(bare) {
                return format!("-{}-{}", prefix, token);
            }
        }
        match self.spacing_token(value) {
            Some(token) => format!("{}-{}", prefix, token),
            None => format!("{}-[{}]", prefix, bracket_value(value)),
        }
    }

    /// Expand the 1/2/3/4-value margin/padding shorthands.
    fn box_shorthand(&self, kind: char, value: &str) -> Vec<String> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        let sides: Vec<(String, &str)> = match parts.as_slice() {
            [all] => vec![(kind.to_string(), *all)],
            [vertical, horizontal] => vec![
                (format!("{}y", kind), *vertical),
                (format!("{}x", kind), *horizontal),
            ],
            [top, horizontal, bottom] => vec![
                (format!("{}t", kind), *top),
                (format!("{}x", kind), *horizontal),
                (format!("{}b", kind), *bottom),
            ],
            [top, right, bottom, left] => vec![
                (format!("{}t", kind), *top),
                (format!("{}r", kind), *right),
                (format!("{}b", kind), *bottom),
                (format!("{}l", kind), *left),
            ],
            _ => return Vec::new(),
        };

        sides
            .into_iter()
            .map(|(prefix, v)| self.spacing_class(&prefix, v))
            .collect()
    }

    fn sizing_class(&self, prefix: &str, value: &str, horizontal: bool) -> String {
        let keyword = match value {
            "100%" => Some("full"),
            "50%" => Some("1/2"),
            "25%" => Some("1/4"),
            "75%" => Some("3/4"),
            "100vw" if horizontal => Some("screen"),
            "100vh" if !horizontal => Some("screen"),
            "fit-content" => Some("fit"),
            "min-content" => Some("min"),
            "max-content" => Some("max"),
            "none" => Some("none"),
            _ => None,
        };

        if let Some(k) = keyword {
            return format!("{}-{}", prefix, k);
        }
        self.spacing_class(prefix, value)
    }

    fn line_height_class(&self, value: &str) -> String {
        let named = match value {
            "1" => Some("none"),
            "1.25" => Some("tight"),
            "1.375" => Some("snug"),
            "1.5" => Some("normal"),
            "1.625" => Some("relaxed"),
            "2" => Some("loose"),
            _ => None,
        };

        if let Some(name) = named {
            return format!("leading-{}", name);
        }
        if let Some(token) = self.spacing_token(value) {
            return format!("leading-{}", token);
        }
        format!("leading-[{}]", bracket_value(value))
    }

    fn color_token(&self, value: &str) -> String {
        let normalized = value.to_ascii_lowercase();

        if let Some(name) = self.color_lookup.get(&normalized) {
            return name.clone();
        }
        for (css, token) in COLOR_PALETTE {
            if *css == normalized {
                return token.to_string();
            }
        }
        format!("[{}]", bracket_value(&normalized))
    }
}

/// Arbitrary-value syntax cannot contain whitespace.
fn bracket_value(value: &str) -> String {
    value.replace(' ', "_")
}

fn format_scale(scale: f32) -> String {
    if (scale - scale.round()).abs() < 1e-4 {
        format!("{}", scale.round() as i32)
    } else {
        format!("{:.1}", scale)
    }
}

fn font_weight_name(value: &str) -> Option<&'static str> {
    match value {
        "100" => Some("thin"),
        "200" => Some("extralight"),
        "300" => Some("light"),
        "400" | "normal" => Some("normal"),
        "500" => Some("medium"),
        "600" => Some("semibold"),
        "700" | "bold" => Some("bold"),
        "800" => Some("extrabold"),
        "900" => Some("black"),
        _ => None,
    }
}

fn font_size_name(value: &str) -> Option<&'static str> {
    match value {
        "0.75rem" => Some("xs"),
        "0.875rem" => Some("sm"),
        "1rem" => Some("base"),
        "1.125rem" => Some("lg"),
        "1.25rem" => Some("xl"),
        "1.5rem" => Some("2xl"),
        "1.875rem" => Some("3xl"),
        "2.25rem" => Some("4xl"),
        "3rem" => Some("5xl"),
        "3.75rem" => Some("6xl"),
        _ => None,
    }
}

fn tracking_name(value: &str) -> Option<&'static str> {
    match value {
        "-0.05em" => Some("tighter"),
        "-0.025em" => Some("tight"),
        "0em" | "0" => Some("normal"),
        "0.025em" => Some("wide"),
        "0.05em" => Some("wider"),
        "0.1em" => Some("widest"),
        _ => None,
    }
}

fn border_radius_class(value: &str) -> String {
    match value {
        "0" | "0px" => "rounded-none".to_string(),
        "0.125rem" => "rounded-sm".to_string(),
        "0.25rem" => "rounded".to_string(),
        "0.375rem" => "rounded-md".to_string(),
        "0.5rem" => "rounded-lg".to_string(),
        "0.75rem" => "rounded-xl".to_string(),
        "1rem" => "rounded-2xl".to_string(),
        "1.5rem" => "rounded-3xl".to_string(),
        "9999px" | "50%" => "rounded-full".to_string(),
        _ => format!("rounded-[{}]", bracket_value(value)),
    }
}

/// Split trailing pseudo-classes/-elements off a simple selector and
/// translate them into variant prefixes (`.btn:hover` -> `.btn` + `hover:`).
///
/// Selectors with unsupported pseudos are returned unchanged with no
/// prefixes; their stripped token will not match any document token, which
/// matches how unconvertible selectors behave throughout the pipeline.
fn split_selector_variants(selector: &str) -> (String, Vec<String>) {
    let Some(colon) = selector.find(':') else {
        return (selector.to_string(), Vec::new());
    };

    let (base, pseudo_chain) = selector.split_at(colon);
    let mut prefixes = Vec::new();

    for pseudo in pseudo_chain.split(':').filter(|p| !p.is_empty()) {
        match VARIANT_MAP.iter().find(|(name, _)| *name == pseudo) {
            Some((_, prefix)) => prefixes.push(format!("{}:", prefix)),
            None => return (selector.to_string(), Vec::new()),
        }
    }

    (base.to_string(), prefixes)
}

/// Matches a minimum-width constraint in either serialization lightningcss
/// produces: the classic `(min-width: 768px)` form or the media-range form
/// `(width >= 768px)`.
fn min_width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:min-width:|width\s*>=)\s*(\d+)px").expect("static regex"))
}

/// Translate a media query string into a variant prefix, if it has one.
fn media_variant(query: &str) -> Option<String> {
    if query.contains("prefers-color-scheme") && query.contains("dark") {
        return Some("dark:".to_string());
    }

    let captures = min_width_regex().captures(query)?;
    let px = captures.get(1)?.as_str();

    BREAKPOINT_MAP
        .iter()
        .find(|(width, _)| *width == px)
        .map(|(_, prefix)| format!("{}:", prefix))
}
