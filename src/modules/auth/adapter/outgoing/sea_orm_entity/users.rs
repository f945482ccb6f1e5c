use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::{Language, User};
use crate::auth::application::ports::outgoing::UserQueryResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub id_number: String,
    #[sea_orm(unique)]
    pub mobile_number: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub uid: String,
    pub pincode: String,
    pub sector: String,
    pub language: UserLanguage,
    pub is_verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_language")]
pub enum UserLanguage {
    #[sea_orm(string_value = "en")]
    En,

    #[sea_orm(string_value = "hi")]
    Hi,

    #[sea_orm(string_value = "kn")]
    Kn,

    #[sea_orm(string_value = "ta")]
    Ta,

    #[sea_orm(string_value = "te")]
    Te,

    #[sea_orm(string_value = "ml")]
    Ml,
}

impl From<Language> for UserLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::En => UserLanguage::En,
            Language::Hi => UserLanguage::Hi,
            Language::Kn => UserLanguage::Kn,
            Language::Ta => UserLanguage::Ta,
            Language::Te => UserLanguage::Te,
            Language::Ml => UserLanguage::Ml,
        }
    }
}

impl From<UserLanguage> for Language {
    fn from(language: UserLanguage) -> Self {
        match language {
            UserLanguage::En => Language::En,
            UserLanguage::Hi => Language::Hi,
            UserLanguage::Kn => Language::Kn,
            UserLanguage::Ta => Language::Ta,
            UserLanguage::Te => Language::Te,
            UserLanguage::Ml => Language::Ml,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            id_number: model.id_number,
            mobile_number: model.mobile_number,
            password_hash: model.password_hash,
            uid: model.uid,
            pincode: model.pincode,
            sector: model.sector,
            language: model.language.into(),
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

impl From<Model> for UserQueryResult {
    fn from(model: Model) -> Self {
        UserQueryResult {
            id: model.id,
            id_number: model.id_number,
            mobile_number: model.mobile_number,
            password_hash: model.password_hash,
            uid: model.uid,
            pincode: model.pincode,
            sector: model.sector,
            language: model.language.into(),
            is_verified: model.is_verified,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
