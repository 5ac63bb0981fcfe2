use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryResult, Statement,
};
use std::sync::Arc;

use crate::modules::membership::application::ports::outgoing::{
    GroupMemberView, MembershipQuery, MembershipQueryError, MembershipResult, UserGroupView,
};

use super::sea_orm_entity::{Column as MembershipColumn, Entity as MembershipEntity};

#[derive(Debug, Clone)]
pub struct MembershipQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MembershipQueryError {
        MembershipQueryError::DatabaseError(e.to_string())
    }

    fn joined_at(row: &QueryResult) -> Result<DateTime<Utc>, DbErr> {
        let ts: DateTime<FixedOffset> = row.try_get("", "joined_at")?;
        Ok(ts.with_timezone(&Utc))
    }

    fn member_from_row(row: &QueryResult) -> Result<GroupMemberView, DbErr> {
        Ok(GroupMemberView {
            membership_id: row.try_get("", "membership_id")?,
            user_id: row.try_get("", "user_id")?,
            user_name: row.try_get("", "user_name")?,
            user_email: row.try_get("", "user_email")?,
            joined_at: Self::joined_at(row)?,
            is_active: row.try_get("", "is_active")?,
        })
    }

    fn user_group_from_row(row: &QueryResult) -> Result<UserGroupView, DbErr> {
        Ok(UserGroupView {
            membership_id: row.try_get("", "membership_id")?,
            group_id: row.try_get("", "group_id")?,
            group_name: row.try_get("", "group_name")?,
            group_description: row.try_get("", "group_description")?,
            joined_at: Self::joined_at(row)?,
            is_active: row.try_get("", "is_active")?,
        })
    }

    async fn exists(&self, sql: &str, id: i32) -> Result<bool, MembershipQueryError> {
        let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![id.into()]);

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(Self::map_db_err)?;

        Ok(row
            .map(|r| r.try_get::<bool>("", "ok"))
            .transpose()
            .map_err(Self::map_db_err)?
            .unwrap_or(false))
    }
}

#[async_trait]
impl MembershipQuery for MembershipQueryPostgres {
    async fn find_active(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<Option<MembershipResult>, MembershipQueryError> {
        let model = MembershipEntity::find()
            .filter(MembershipColumn::UserId.eq(user_id))
            .filter(MembershipColumn::GroupId.eq(group_id))
            .filter(MembershipColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn list_group_members(
        &self,
        group_id: i32,
        include_deleted: bool,
    ) -> Result<Vec<GroupMemberView>, MembershipQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              m.id AS membership_id,
              m.user_id,
              u.name AS user_name,
              u.email AS user_email,
              m.created_at AS joined_at,
              (m.deleted_at IS NULL) AS is_active
            FROM memberships m
            JOIN users u ON u.id = m.user_id
            WHERE m.group_id = $1
              AND ($2 OR m.deleted_at IS NULL)
            ORDER BY m.id
            "#,
            vec![group_id.into(), include_deleted.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(Self::map_db_err)?;

        rows.iter()
            .map(Self::member_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_db_err)
    }

    async fn list_user_groups(
        &self,
        user_id: i32,
        include_deleted: bool,
    ) -> Result<Vec<UserGroupView>, MembershipQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              m.id AS membership_id,
              m.group_id,
              g.name AS group_name,
              g.description AS group_description,
              m.created_at AS joined_at,
              (m.deleted_at IS NULL) AS is_active
            FROM memberships m
            JOIN groups g ON g.id = m.group_id
            WHERE m.user_id = $1
              AND ($2 OR m.deleted_at IS NULL)
            ORDER BY m.id
            "#,
            vec![user_id.into(), include_deleted.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(Self::map_db_err)?;

        rows.iter()
            .map(Self::user_group_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_db_err)
    }

    async fn group_is_active(&self, group_id: i32) -> Result<bool, MembershipQueryError> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE id = $1 AND deleted_at IS NULL) AS ok",
            group_id,
        )
        .await
    }

    async fn user_is_active(&self, user_id: i32) -> Result<bool, MembershipQueryError> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND deleted_at IS NULL) AS ok",
            user_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{sea_query::Value, MockDatabase, RuntimeErr};
    use std::collections::BTreeMap;

    fn member_row(membership_id: i32, user_id: i32, name: &str, active: bool) -> BTreeMap<String, Value> {
        let now = Utc::now().fixed_offset();
        BTreeMap::from([
            ("membership_id".to_string(), Value::Int(Some(membership_id))),
            ("user_id".to_string(), Value::Int(Some(user_id))),
            (
                "user_name".to_string(),
                Value::String(Some(Box::new(name.to_string()))),
            ),
            (
                "user_email".to_string(),
                Value::String(Some(Box::new(format!("{}@example.com", name)))),
            ),
            (
                "joined_at".to_string(),
                Value::ChronoDateTimeWithTimeZone(Some(Box::new(now))),
            ),
            ("is_active".to_string(), Value::Bool(Some(active))),
        ])
    }

    #[tokio::test]
    async fn test_list_group_members_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                member_row(1, 3, "alice", true),
                member_row(2, 4, "bob", false),
            ]])
            .into_connection();

        let query = MembershipQueryPostgres::new(Arc::new(db));
        let members = query.list_group_members(1, true).await.unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].user_name, "alice");
        assert_eq!(members[1].user_email, "bob@example.com");
        assert!(!members[1].is_active);
    }

    async fn logged_sql(include_deleted: bool) -> String {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<BTreeMap<String, Value>>::new()])
                .into_connection(),
        );

        let query = MembershipQueryPostgres::new(Arc::clone(&db));
        query.list_group_members(1, include_deleted).await.unwrap();
        drop(query);

        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(log.len(), 1);
        format!("{:?}", log[0])
    }

    #[tokio::test]
    async fn test_list_group_members_hides_removed_by_default() {
        let sql = logged_sql(false).await;

        assert!(sql.contains("m.deleted_at IS NULL"), "{}", sql);
        assert!(sql.contains("Int(Some(1)), Bool(Some(false))"), "{}", sql);
    }

    #[tokio::test]
    async fn test_list_group_members_passes_include_deleted() {
        let sql = logged_sql(true).await;

        assert!(sql.contains("Int(Some(1)), Bool(Some(true))"), "{}", sql);
    }

    #[tokio::test]
    async fn test_list_user_groups_with_null_description() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([
                ("membership_id".to_string(), Value::Int(Some(5))),
                ("group_id".to_string(), Value::Int(Some(2))),
                (
                    "group_name".to_string(),
                    Value::String(Some(Box::new("ops".to_string()))),
                ),
                ("group_description".to_string(), Value::String(None)),
                (
                    "joined_at".to_string(),
                    Value::ChronoDateTimeWithTimeZone(Some(Box::new(now))),
                ),
                ("is_active".to_string(), Value::Bool(Some(true))),
            ])]])
            .into_connection();

        let query = MembershipQueryPostgres::new(Arc::new(db));
        let groups = query.list_user_groups(3, false).await.unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group_name, "ops");
        assert!(groups[0].group_description.is_none());
    }

    #[tokio::test]
    async fn test_group_is_active_reads_flag() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "ok".to_string(),
                Value::Bool(Some(false)),
            )])]])
            .into_connection();

        let query = MembershipQueryPostgres::new(Arc::new(db));
        assert!(!query.group_is_active(9).await.unwrap());
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("down".into()))])
            .into_connection();

        let query = MembershipQueryPostgres::new(Arc::new(db));
        assert!(matches!(
            query.list_group_members(1, false).await,
            Err(MembershipQueryError::DatabaseError(_))
        ));
    }
}
