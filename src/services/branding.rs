use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use validator::Validate;

/// Errors that can occur when updating branding
#[derive(Debug, Error)]
pub enum BrandingError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid color for {field}: {value}")]
    InvalidColor { field: &'static str, value: String },
}

/// Restaurant branding shown on the wine menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BrandingSettings {
    #[validate(length(min = 1, max = 120))]
    #[serde(rename = "restaurantName", alias = "restaurant_name")]
    pub restaurant_name: String,
    #[validate(url)]
    #[serde(rename = "logoUrl", alias = "logo_url")]
    pub logo_url: Option<String>,
    pub palette: ColorPalette,
}

/// Menu color palette, as `#rgb` or `#rrggbb`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#722f37".to_string(),
            secondary: "#c9a66b".to_string(),
            accent: "#e8c39e".to_string(),
            background: "#fdf8f3".to_string(),
            text: "#2b1d1f".to_string(),
        }
    }
}

impl ColorPalette {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
        ]
    }
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            restaurant_name: "Винная карта".to_string(),
            logo_url: None,
            palette: ColorPalette::default(),
        }
    }
}

impl BrandingSettings {
    /// Validate field constraints and palette colors
    pub fn check(&self) -> Result<(), BrandingError> {
        self.validate()?;

        for (field, value) in self.palette.entries() {
            if !is_hex_color(value) {
                return Err(BrandingError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Render the palette as CSS custom properties
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (field, value) in self.palette.entries() {
            css.push_str(&format!("  --brand-{}: {};\n", field, value));
        }
        css.push('}');
        css.push('\n');
        css
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Branding shared by the service, with change notifications
///
/// Updates are published on a watch channel, so subscribers (CSS renderers,
/// open menu sessions) pick up changes without a restart.
#[derive(Clone)]
pub struct BrandingStore {
    sender: Arc<watch::Sender<BrandingSettings>>,
    initial: Arc<BrandingSettings>,
}

impl BrandingStore {
    /// Create a store seeded with the startup branding
    pub fn new(initial: BrandingSettings) -> Result<Self, BrandingError> {
        initial.check()?;
        let (sender, _receiver) = watch::channel(initial.clone());

        Ok(Self {
            sender: Arc::new(sender),
            initial: Arc::new(initial),
        })
    }

    pub fn current(&self) -> BrandingSettings {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BrandingSettings> {
        self.sender.subscribe()
    }

    /// Replace the branding and notify subscribers
    pub fn update(&self, settings: BrandingSettings) -> Result<BrandingSettings, BrandingError> {
        settings.check()?;
        self.sender.send_replace(settings.clone());

        tracing::info!("Branding updated for {}", settings.restaurant_name);
        Ok(settings)
    }

    /// Restore the startup branding
    pub fn reset(&self) -> BrandingSettings {
        let initial = (*self.initial).clone();
        self.sender.send_replace(initial.clone());
        initial
    }
}
