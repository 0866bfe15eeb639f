#[derive(Debug, Clone, PartialEq, Eq)]
/// Публичная модель поста, как её возвращает сервис контента.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Путь к изображению; пустая строка, если изображения нет.
    pub image: String,
    /// Содержимое поста (может быть пустым).
    pub content: String,
    /// Дата и время создания поста (RFC 3339, UTC).
    pub created_at: String,
    /// Дата и время последнего обновления поста (RFC 3339, UTC).
    pub updated_at: String,
}

impl Post {
    /// Возвращает `true`, если у поста есть изображение.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
