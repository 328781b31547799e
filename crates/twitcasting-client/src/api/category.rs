use super::*;

#[derive(Debug, Clone)]
pub struct CategoryService {
    client: Arc<ApiClient>,
}

impl CategoryService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List categories that currently have live movies. `lang` is `ja` or `en`.
    pub async fn get_categories(
        &self,
        lang: &str,
        auth: AuthMode,
    ) -> ApiResult<CategoriesContainer> {
        let path = Query::new().pair("lang", lang).to_path("/categories");
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "get_categories").await
    }
}
