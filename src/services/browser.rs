use fake_user_agent::get_chrome_rua;
use thirtyfour::error::WebDriverResult;
use thirtyfour::prelude::*;

use crate::configuration::WebDriverSettings;

/// The one browser session shared by the whole run.
pub struct Browser {
    pub driver: WebDriver,
}

impl Browser {
    pub async fn connect(settings: &WebDriverSettings) -> WebDriverResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg("--disable-blink-features=AutomationControlled")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_arg(&format!("user-agent={}", get_chrome_rua()))?;

        let driver = WebDriver::new(&settings.url, caps).await?;
        driver.maximize_window().await?;

        Ok(Browser { driver })
    }

    pub async fn quit(self) -> WebDriverResult<()> {
        self.driver.quit().await
    }
}
