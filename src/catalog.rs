use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::{
    entities::{director, genre, movie},
    error::AppResult,
    models::{Director, Genre, Movie, MovieFilter, NewDirector, NewGenre, NewMovie},
};

/// Store handle shared by every request. Cloning is cheap; the pool is shared.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        let rows = genre::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Option<Genre>> {
        let row = genre::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Genre::from))
    }

    pub async fn create_genre(&self, new: NewGenre) -> AppResult<i32> {
        let model = genre::ActiveModel { id: new.id.map_or(NotSet, Set), name: Set(new.name) };

        let txn = self.db.begin().await?;
        let id = genre::Entity::insert(model).exec(&txn).await?.last_insert_id;
        txn.commit().await?;

        tracing::debug!(id, "genre created");
        Ok(id)
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, removed = res.rows_affected, "genre delete");
        Ok(res.rows_affected > 0)
    }

    pub async fn list_directors(&self) -> AppResult<Vec<Director>> {
        let rows = director::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Director::from).collect())
    }

    pub async fn get_director(&self, id: i32) -> AppResult<Option<Director>> {
        let row = director::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Director::from))
    }

    pub async fn create_director(&self, new: NewDirector) -> AppResult<i32> {
        let model = director::ActiveModel { id: new.id.map_or(NotSet, Set), name: Set(new.name) };

        let txn = self.db.begin().await?;
        let id = director::Entity::insert(model).exec(&txn).await?.last_insert_id;
        txn.commit().await?;

        tracing::debug!(id, "director created");
        Ok(id)
    }

    pub async fn delete_director(&self, id: i32) -> AppResult<bool> {
        let res = director::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, removed = res.rows_affected, "director delete");
        Ok(res.rows_affected > 0)
    }

    /// Filters are exact matches on the reference columns, combined with AND.
    pub async fn list_movies(&self, filter: &MovieFilter) -> AppResult<Vec<Movie>> {
        let Some((director_id, genre_id)) = filter.ids() else {
            return Ok(Vec::new());
        };

        let mut query = movie::Entity::find();
        if let Some(director_id) = director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }

        let rows = query.all(&self.db).await?;
        self.with_names(rows).await
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<Option<Movie>> {
        let Some(row) = movie::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_names(vec![row]).await?.pop())
    }

    /// References are stored as given; they are not checked against existing rows.
    pub async fn create_movie(&self, new: NewMovie) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: new.id.map_or(NotSet, Set),
            title: Set(new.title),
            description: Set(new.description),
            trailer: Set(new.trailer),
            year: Set(new.year),
            rating: Set(new.rating),
            genre_id: Set(new.genre_id),
            director_id: Set(new.director_id),
        };

        let txn = self.db.begin().await?;
        let id = movie::Entity::insert(model).exec(&txn).await?.last_insert_id;
        txn.commit().await?;

        tracing::debug!(id, "movie created");
        Ok(id)
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<bool> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, removed = res.rows_affected, "movie delete");
        Ok(res.rows_affected > 0)
    }

    async fn with_names(&self, rows: Vec<movie::Model>) -> AppResult<Vec<Movie>> {
        let genre_ids: HashSet<i32> = rows.iter().filter_map(|m| m.genre_id).collect();
        let director_ids: HashSet<i32> = rows.iter().filter_map(|m| m.director_id).collect();

        let genres: HashMap<i32, Option<String>> = if genre_ids.is_empty() {
            HashMap::new()
        } else {
            genre::Entity::find()
                .filter(genre::Column::Id.is_in(genre_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, g.name))
                .collect()
        };

        let directors: HashMap<i32, Option<String>> = if director_ids.is_empty() {
            HashMap::new()
        } else {
            director::Entity::find()
                .filter(director::Column::Id.is_in(director_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|d| (d.id, d.name))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|m| {
                let genre = m.genre_id.and_then(|id| genres.get(&id).cloned().flatten());
                let director = m.director_id.and_then(|id| directors.get(&id).cloned().flatten());
                Movie::from_model(m, genre, director)
            })
            .collect())
    }
}
