use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Language, User};
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, IFetchProfileUseCase};
use crate::auth::application::use_cases::list_sector_users::{
    IListSectorUsersUseCase, ListSectorUsersError,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginOutput, LoginRequest,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterOutput, RegisterRequest,
};
use crate::auth::application::use_cases::request_password_reset::{
    ForgotPasswordRequest, IRequestPasswordResetUseCase, PasswordResetChallenge,
    RequestPasswordResetError,
};
use crate::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError, ResetPasswordRequest,
};
use crate::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};
use crate::complaint::application::domain::entities::{Complaint, NewComplaint};
use crate::complaint::application::ports::outgoing::complaint_query::PageResult;
use crate::complaint::application::use_cases::create_complaint::{
    CreateComplaintError, ICreateComplaintUseCase, UploadedImage,
};
use crate::complaint::application::use_cases::delete_complaint_image::{
    DeleteComplaintImageError, IDeleteComplaintImageUseCase,
};
use crate::complaint::application::use_cases::get_complaint::{
    GetComplaintError, IGetComplaintUseCase,
};
use crate::complaint::application::use_cases::get_complaint_image::{
    GetComplaintImageError, IGetComplaintImageUseCase, ImageFile,
};
use crate::complaint::application::use_cases::list_complaints::{
    IListComplaintsUseCase, ListComplaintsError,
};
use crate::complaint::application::use_cases::search_complaints::{
    ISearchComplaintsUseCase, SearchComplaintsError,
};
use crate::directory::application::domain::entities::{PincodeEntry, SectorRecord};
use crate::directory::application::use_cases::list_sector_pincodes::{
    IListSectorPincodesUseCase, ListSectorPincodesError,
};
use crate::directory::application::use_cases::list_sectors::{
    IListSectorsUseCase, ListSectorsError,
};
use crate::directory::application::use_cases::lookup_pincode::{
    ILookupPincodeUseCase, LookupPincodeError,
};
use crate::directory::application::use_cases::search_directory::{
    ISearchDirectoryUseCase, SearchDirectoryError,
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisterOutput, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserQueryResult, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _language: Language,
    ) -> Result<User, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListSectorUsersUseCase;

#[async_trait]
impl IListSectorUsersUseCase for StubListSectorUsersUseCase {
    async fn execute(&self, _sector: &str) -> Result<Vec<UserQueryResult>, ListSectorUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl IRequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(
        &self,
        _request: ForgotPasswordRequest,
    ) -> Result<PasswordResetChallenge, RequestPasswordResetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _request: ResetPasswordRequest) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLookupPincodeUseCase;

#[async_trait]
impl ILookupPincodeUseCase for StubLookupPincodeUseCase {
    async fn execute(&self, _code: &str) -> Result<PincodeEntry, LookupPincodeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListSectorsUseCase;

#[async_trait]
impl IListSectorsUseCase for StubListSectorsUseCase {
    async fn execute(&self) -> Result<Vec<SectorRecord>, ListSectorsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListSectorPincodesUseCase;

#[async_trait]
impl IListSectorPincodesUseCase for StubListSectorPincodesUseCase {
    async fn execute(&self, _sector: &str) -> Result<Vec<PincodeEntry>, ListSectorPincodesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSearchDirectoryUseCase;

#[async_trait]
impl ISearchDirectoryUseCase for StubSearchDirectoryUseCase {
    async fn execute(&self, _query: &str) -> Result<Vec<PincodeEntry>, SearchDirectoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateComplaintUseCase;

#[async_trait]
impl ICreateComplaintUseCase for StubCreateComplaintUseCase {
    async fn execute(
        &self,
        _complaint: NewComplaint,
        _images: Vec<UploadedImage>,
    ) -> Result<Complaint, CreateComplaintError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListComplaintsUseCase;

#[async_trait]
impl IListComplaintsUseCase for StubListComplaintsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _page: Option<u64>,
        _limit: Option<u64>,
    ) -> Result<PageResult<Complaint>, ListComplaintsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetComplaintUseCase;

#[async_trait]
impl IGetComplaintUseCase for StubGetComplaintUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _complaint_id: Uuid,
    ) -> Result<Complaint, GetComplaintError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSearchComplaintsUseCase;

#[async_trait]
impl ISearchComplaintsUseCase for StubSearchComplaintsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _query: &str,
    ) -> Result<Vec<Complaint>, SearchComplaintsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteComplaintImageUseCase;

#[async_trait]
impl IDeleteComplaintImageUseCase for StubDeleteComplaintImageUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _complaint_id: Uuid,
        _filename: &str,
    ) -> Result<(), DeleteComplaintImageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetComplaintImageUseCase;

#[async_trait]
impl IGetComplaintImageUseCase for StubGetComplaintImageUseCase {
    async fn execute(&self, _user_id: Uuid, _filename: &str) -> Result<ImageFile, GetComplaintImageError> {
        unimplemented!("Not used in this test")
    }
}
