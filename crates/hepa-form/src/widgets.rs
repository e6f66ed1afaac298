//! Bounded input widgets for each raw field.

use serde_json::Value;

use hepa_core::schema::column;
use hepa_core::vocab::{drug, sex};

/// How one field is collected, with its bounds and default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget {
    /// Whole number; `max` is unbounded when `None`.
    Integer {
        min: i64,
        max: Option<i64>,
        default: i64,
    },
    /// Decimal number with a lower bound.
    Number { min: f64, default: f64 },
    /// One of a fixed set of labels; `default` indexes `options`.
    Choice {
        options: &'static [&'static str],
        default: usize,
    },
    /// 0 or 1, defaulting to 0.
    Flag,
}

impl Widget {
    /// Parse one line of input. Blank input takes the default.
    pub fn parse(&self, input: &str) -> Result<Value, String> {
        let input = input.trim();
        match *self {
            Widget::Integer { min, max, default } => {
                let value = if input.is_empty() {
                    default
                } else {
                    input
                        .parse::<i64>()
                        .map_err(|_| format!("'{input}' is not a whole number"))?
                };
                if value < min || max.is_some_and(|max| value > max) {
                    return Err(format!("must be {}", self.bounds()));
                }
                Ok(Value::from(value))
            }
            Widget::Number { min, default } => {
                let value = if input.is_empty() {
                    default
                } else {
                    input
                        .parse::<f64>()
                        .map_err(|_| format!("'{input}' is not a number"))?
                };
                if !value.is_finite() || value < min {
                    return Err(format!("must be {}", self.bounds()));
                }
                Ok(Value::from(value))
            }
            Widget::Choice { options, default } => {
                if input.is_empty() {
                    return Ok(Value::from(options[default]));
                }
                if let Ok(n) = input.parse::<usize>()
                    && (1..=options.len()).contains(&n)
                {
                    return Ok(Value::from(options[n - 1]));
                }
                options
                    .iter()
                    .find(|o| o.eq_ignore_ascii_case(input))
                    .map(|o| Value::from(*o))
                    .ok_or_else(|| format!("choose one of {}", self.bounds()))
            }
            Widget::Flag => match input {
                "" | "0" => Ok(Value::from(0)),
                "1" => Ok(Value::from(1)),
                _ => Err("must be 0 or 1".to_string()),
            },
        }
    }

    /// Human-readable bounds, shown in prompts and errors.
    pub fn bounds(&self) -> String {
        match *self {
            Widget::Integer { min, max: Some(max), .. } => format!("{min}-{max}"),
            Widget::Integer { min, max: None, .. } => format!(">= {min}"),
            Widget::Number { min, .. } => format!(">= {min}"),
            Widget::Choice { options, .. } => options
                .iter()
                .enumerate()
                .map(|(i, o)| format!("{}) {o}", i + 1))
                .collect::<Vec<_>>()
                .join(", "),
            Widget::Flag => "0 or 1".to_string(),
        }
    }

    pub fn default_display(&self) -> String {
        match *self {
            Widget::Integer { default, .. } => default.to_string(),
            Widget::Number { default, .. } => default.to_string(),
            Widget::Choice { options, default } => options[default].to_string(),
            Widget::Flag => "0".to_string(),
        }
    }
}

/// A field of the form: the record key it fills, its label, and its widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub widget: Widget,
}

const fn number(key: &'static str, min: f64, default: f64) -> FieldSpec {
    FieldSpec {
        key,
        label: key,
        widget: Widget::Number { min, default },
    }
}

const fn flag(key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label: key,
        widget: Widget::Flag,
    }
}

/// Number of wire keys on a raw patient record, `id` included.
pub const RAW_FIELD_COUNT: usize = 19;

/// Every field of the form, in the order it is asked.
pub const FIELDS: [FieldSpec; RAW_FIELD_COUNT] = [
    FieldSpec {
        key: column::ID,
        label: "Patient ID",
        widget: Widget::Integer {
            min: 1,
            max: None,
            default: 1,
        },
    },
    FieldSpec {
        key: column::N_DAYS,
        label: "Days in Study",
        widget: Widget::Integer {
            min: 1,
            max: Some(500),
            default: 150,
        },
    },
    FieldSpec {
        key: column::DRUG,
        label: "Drug",
        widget: Widget::Choice {
            options: &[drug::D_PENICILLAMINE, drug::PLACEBO],
            default: 0,
        },
    },
    FieldSpec {
        key: column::AGE,
        label: "Age",
        widget: Widget::Integer {
            min: 18,
            max: Some(100),
            default: 45,
        },
    },
    FieldSpec {
        key: column::SEX,
        label: "Sex",
        widget: Widget::Choice {
            options: &[sex::MALE, sex::FEMALE],
            default: 0,
        },
    },
    flag(column::ASCITES),
    flag(column::HEPATOMEGALY),
    flag(column::SPIDERS),
    flag(column::EDEMA),
    number(column::BILIRUBIN, 0.1, 1.8),
    number(column::CHOLESTEROL, 50.0, 200.0),
    number(column::ALBUMIN, 1.0, 3.5),
    number(column::COPPER, 0.0, 80.0),
    number(column::ALK_PHOS, 20.0, 120.0),
    number(column::SGOT, 10.0, 90.0),
    number(column::TRYGLICERIDES, 10.0, 150.0),
    number(column::PLATELETS, 10000.0, 250000.0),
    number(column::PROTHROMBIN, 5.0, 10.0),
    FieldSpec {
        key: column::STAGE,
        label: "Stage",
        widget: Widget::Integer {
            min: 1,
            max: Some(4),
            default: 2,
        },
    },
];
