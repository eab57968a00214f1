//! Side menu navigation.

use boprobe_core::driver::AdminPage;
use tracing::debug;

use crate::client::WebDriverClient;
use crate::error::WebDriverError;

/// Sub-tab leading from Stocks to Movements.
pub const MOVEMENTS_TAB: &str = "#head_tabs li:nth-child(2) > a";
/// Header that only exists once the movements grid is rendered.
pub const MOVEMENTS_READY: &str = "#app .ps-sortable-column[data-sort-col-name='date_add']";

/// Parent entry and optional child entry of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLink {
    pub parent: &'static str,
    pub child: Option<&'static str>,
}

impl MenuLink {
    const fn new(parent: &'static str, child: Option<&'static str>) -> Self {
        Self { parent, child }
    }
}

/// Menu entry for a page reached from the side menu.
///
/// `Movements` has none: it is a sub-tab of `Stocks`.
pub fn menu_link(page: AdminPage) -> Option<MenuLink> {
    match page {
        AdminPage::Dashboard => Some(MenuLink::new("#tab-AdminDashboard", None)),
        AdminPage::Stocks => Some(MenuLink::new(
            "#subtab-AdminCatalog",
            Some("#subtab-AdminStockManagement"),
        )),
        AdminPage::Attributes => Some(MenuLink::new(
            "#subtab-AdminCatalog",
            Some("#subtab-AdminParentAttributesGroups"),
        )),
        AdminPage::ThemeAndLogo => Some(MenuLink::new(
            "#subtab-AdminParentThemes",
            Some("#subtab-AdminThemesParent"),
        )),
        AdminPage::Movements => None,
    }
}

/// Navigates to `page` and returns the document title.
pub async fn go_to(client: &WebDriverClient, page: AdminPage) -> Result<String, WebDriverError> {
    match menu_link(page) {
        Some(link) => follow(client, link).await?,
        None => {
            if let Some(stocks) = menu_link(AdminPage::Stocks) {
                follow(client, stocks).await?;
            }
            client.click_visible(MOVEMENTS_TAB).await?;
            client.wait_for_visible(MOVEMENTS_READY).await?;
        }
    }
    let title = client.title().await?;
    debug!(page = %page, title = %title, "navigated");
    Ok(title)
}

async fn follow(client: &WebDriverClient, link: MenuLink) -> Result<(), WebDriverError> {
    client.click_visible(&format!("{} > a", link.parent)).await?;
    if let Some(child) = link.child {
        client.click_visible(&format!("{child} > a")).await?;
        client
            .wait_for_visible(&format!("{child}.link-active"))
            .await?;
    }
    Ok(())
}
