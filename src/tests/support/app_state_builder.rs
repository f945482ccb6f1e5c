use crate::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::auth::application::use_cases::list_sector_users::IListSectorUsersUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::auth::application::use_cases::request_password_reset::IRequestPasswordResetUseCase;
use crate::auth::application::use_cases::reset_password::IResetPasswordUseCase;
use crate::auth::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::complaint::application::use_cases::create_complaint::ICreateComplaintUseCase;
use crate::complaint::application::use_cases::delete_complaint_image::IDeleteComplaintImageUseCase;
use crate::complaint::application::use_cases::get_complaint::IGetComplaintUseCase;
use crate::complaint::application::use_cases::get_complaint_image::IGetComplaintImageUseCase;
use crate::complaint::application::use_cases::list_complaints::IListComplaintsUseCase;
use crate::complaint::application::use_cases::search_complaints::ISearchComplaintsUseCase;
use crate::directory::application::use_cases::list_sector_pincodes::IListSectorPincodesUseCase;
use crate::directory::application::use_cases::list_sectors::IListSectorsUseCase;
use crate::directory::application::use_cases::lookup_pincode::ILookupPincodeUseCase;
use crate::directory::application::use_cases::search_directory::ISearchDirectoryUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    fetch_profile: Option<Arc<dyn IFetchProfileUseCase + Send + Sync>>,
    update_profile: Option<Arc<dyn IUpdateProfileUseCase + Send + Sync>>,
    list_sector_users: Option<Arc<dyn IListSectorUsersUseCase + Send + Sync>>,
    request_password_reset: Option<Arc<dyn IRequestPasswordResetUseCase + Send + Sync>>,
    reset_password: Option<Arc<dyn IResetPasswordUseCase + Send + Sync>>,
    lookup_pincode: Option<Arc<dyn ILookupPincodeUseCase + Send + Sync>>,
    list_sectors: Option<Arc<dyn IListSectorsUseCase + Send + Sync>>,
    list_sector_pincodes: Option<Arc<dyn IListSectorPincodesUseCase + Send + Sync>>,
    search_directory: Option<Arc<dyn ISearchDirectoryUseCase + Send + Sync>>,
    create_complaint: Option<Arc<dyn ICreateComplaintUseCase + Send + Sync>>,
    list_complaints: Option<Arc<dyn IListComplaintsUseCase + Send + Sync>>,
    get_complaint: Option<Arc<dyn IGetComplaintUseCase + Send + Sync>>,
    search_complaints: Option<Arc<dyn ISearchComplaintsUseCase + Send + Sync>>,
    delete_complaint_image: Option<Arc<dyn IDeleteComplaintImageUseCase + Send + Sync>>,
    get_complaint_image: Option<Arc<dyn IGetComplaintImageUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            list_sector_users: Some(Arc::new(StubListSectorUsersUseCase)),
            request_password_reset: Some(Arc::new(StubRequestPasswordResetUseCase)),
            reset_password: Some(Arc::new(StubResetPasswordUseCase)),
            lookup_pincode: Some(Arc::new(StubLookupPincodeUseCase)),
            list_sectors: Some(Arc::new(StubListSectorsUseCase)),
            list_sector_pincodes: Some(Arc::new(StubListSectorPincodesUseCase)),
            search_directory: Some(Arc::new(StubSearchDirectoryUseCase)),
            create_complaint: Some(Arc::new(StubCreateComplaintUseCase)),
            list_complaints: Some(Arc::new(StubListComplaintsUseCase)),
            get_complaint: Some(Arc::new(StubGetComplaintUseCase)),
            search_complaints: Some(Arc::new(StubSearchComplaintsUseCase)),
            delete_complaint_image: Some(Arc::new(StubDeleteComplaintImageUseCase)),
            get_complaint_image: Some(Arc::new(StubGetComplaintImageUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_list_sector_users(
        mut self,
        uc: impl IListSectorUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_sector_users = Some(Arc::new(uc));
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl IRequestPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.request_password_reset = Some(Arc::new(uc));
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl IResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reset_password = Some(Arc::new(uc));
        self
    }

    pub fn with_lookup_pincode(
        mut self,
        uc: impl ILookupPincodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.lookup_pincode = Some(Arc::new(uc));
        self
    }

    pub fn with_list_sectors(
        mut self,
        uc: impl IListSectorsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_sectors = Some(Arc::new(uc));
        self
    }

    pub fn with_list_sector_pincodes(
        mut self,
        uc: impl IListSectorPincodesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_sector_pincodes = Some(Arc::new(uc));
        self
    }

    pub fn with_search_directory(
        mut self,
        uc: impl ISearchDirectoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_directory = Some(Arc::new(uc));
        self
    }

    pub fn with_search_directory_arc(
        mut self,
        uc: Arc<dyn ISearchDirectoryUseCase + Send + Sync>,
    ) -> Self {
        self.search_directory = Some(uc);
        self
    }

    pub fn with_create_complaint(
        mut self,
        uc: impl ICreateComplaintUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_complaint = Some(Arc::new(uc));
        self
    }

    pub fn with_list_complaints(
        mut self,
        uc: impl IListComplaintsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_complaints = Some(Arc::new(uc));
        self
    }

    pub fn with_get_complaint(
        mut self,
        uc: impl IGetComplaintUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_complaint = Some(Arc::new(uc));
        self
    }

    pub fn with_search_complaints(
        mut self,
        uc: impl ISearchComplaintsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_complaints = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_complaint_image(
        mut self,
        uc: impl IDeleteComplaintImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_complaint_image = Some(Arc::new(uc));
        self
    }

    pub fn with_get_complaint_image(
        mut self,
        uc: impl IGetComplaintImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_complaint_image = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            fetch_profile_use_case: self.fetch_profile.unwrap(),
            update_profile_use_case: self.update_profile.unwrap(),
            list_sector_users_use_case: self.list_sector_users.unwrap(),
            request_password_reset_use_case: self.request_password_reset.unwrap(),
            reset_password_use_case: self.reset_password.unwrap(),
            lookup_pincode_use_case: self.lookup_pincode.unwrap(),
            list_sectors_use_case: self.list_sectors.unwrap(),
            list_sector_pincodes_use_case: self.list_sector_pincodes.unwrap(),
            search_directory_use_case: self.search_directory.unwrap(),
            create_complaint_use_case: self.create_complaint.unwrap(),
            list_complaints_use_case: self.list_complaints.unwrap(),
            get_complaint_use_case: self.get_complaint.unwrap(),
            search_complaints_use_case: self.search_complaints.unwrap(),
            delete_complaint_image_use_case: self.delete_complaint_image.unwrap(),
            get_complaint_image_use_case: self.get_complaint_image.unwrap(),
        })
    }
}
