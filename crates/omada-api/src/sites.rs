// Controller-level endpoints: sites, site settings, scenarios, admin users.

use tracing::debug;

use crate::client::OmadaClient;
use crate::error::Error;
use crate::models::DataPage;

impl OmadaClient {
    /// List the sites visible to the logged-in account.
    ///
    /// `GET /api/v2/sites` (the `result.data` array)
    pub async fn get_sites(&self) -> Result<Vec<serde_json::Value>, Error> {
        let url = self.api_url("/sites")?;
        debug!("listing sites");
        let page: DataPage = self.get(url).await?;
        Ok(page.data)
    }

    /// All settings of one site.
    ///
    /// `GET /api/v2/sites/{site}/setting`
    pub async fn get_site_settings(&self, site: &str) -> Result<serde_json::Value, Error> {
        let url = self.site_url(site, "/setting")?;
        debug!(site, "fetching site settings");
        self.get(url).await
    }

    /// Deployment scenarios known to the controller.
    ///
    /// `GET /api/v2/scenarios`
    pub async fn get_scenarios(&self) -> Result<serde_json::Value, Error> {
        let url = self.api_url("/scenarios")?;
        debug!("listing scenarios");
        self.get(url).await
    }

    /// Controller admin accounts.
    ///
    /// `GET /api/v2/users` (the `result.data` array)
    pub async fn get_admins(&self) -> Result<Vec<serde_json::Value>, Error> {
        let url = self.api_url("/users")?;
        debug!("listing admins");
        let page: DataPage = self.get(url).await?;
        Ok(page.data)
    }
}
