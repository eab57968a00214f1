//! Test configuration builder for E2E tests.

use boprobe_core::config::BoprobeConfig;

/// Account accepted by [`crate::helpers::fixtures`] back offices.
#[allow(dead_code)]
pub const TEST_EMAIL: &str = "demo@prestashop.com";

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "prestashop_demo";

/// Builder for constructing test-friendly `BoprobeConfig` instances.
///
/// Defaults to the demo account and the stock campaign defaults.
#[allow(dead_code)]
pub struct TestConfigBuilder {
    config: BoprobeConfig,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    pub fn new() -> Self {
        let mut config = BoprobeConfig::default();
        config.backoffice.email = TEST_EMAIL.to_owned();
        config.backoffice.password = TEST_PASSWORD.to_owned();
        Self { config }
    }

    pub fn password(mut self, password: &str) -> Self {
        self.config.backoffice.password = password.to_owned();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.config.backoffice.language = language.to_owned();
        self
    }

    pub fn product_filter(mut self, product: &str) -> Self {
        self.config.campaign.product_filter = product.to_owned();
        self
    }

    pub fn expected_theme_count(mut self, count: usize) -> Self {
        self.config.campaign.expected_theme_count = count;
        self
    }

    /// Build and validate.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails validation.
    pub fn build(self) -> BoprobeConfig {
        self.config
            .validate()
            .expect("test config should be valid");
        self.config
    }
}
