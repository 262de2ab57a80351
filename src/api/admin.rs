use crate::domain::admin::Admin;
use crate::domain::types::AdminId;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::dto::envelope::ApiResponse;
use crate::forms::login::LoginForm;
use crate::http::{ClientResult, HttpClient};

#[derive(Clone, Debug)]
pub struct AdminApi {
    http: HttpClient,
}

impl AdminApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Validates the credentials, signs in and persists the session.
    pub async fn login(&self, form: LoginForm) -> ClientResult<ApiResponse<LoginResponse>> {
        let request = LoginRequest::try_from(form)?;
        let response: ApiResponse<LoginResponse> =
            self.http.post("admin/login", &request).await?;
        self.http.session().persist_login(&response.data)?;
        log::info!("Signed in as {}", response.data.admin.username);
        Ok(response)
    }

    pub async fn get_admin(&self, id: AdminId) -> ClientResult<ApiResponse<Admin>> {
        self.http.get(&format!("admin/{id}")).await
    }

    /// Local sign-out; the backend keeps no session to end.
    pub fn logout(&self) -> ClientResult<()> {
        self.http.session().logout()?;
        Ok(())
    }
}
