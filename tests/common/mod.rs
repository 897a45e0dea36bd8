//! Shared test harness: in-memory repositories.
//!
//! These doubles implement the repository traits over plain vectors so
//! service behavior can be tested without a database.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use jobboard_api::domain::{
    Application, ApplicationUpdate, Employer, EmployerUpdate, Job, JobSeeker, JobSeekerUpdate,
    JobUpdate, NewApplication, NewEmployer, NewJob, NewJobSeeker, NewResume, NewUser,
    Notification, Resume, ResumeUpdate, User, UserProfileUpdate,
};
use jobboard_api::errors::{AppError, AppResult};
use jobboard_api::infra::repositories::{
    ApplicationRepository, EmployerRepository, JobRepository, JobSeekerRepository,
    NotificationRepository, PasswordResetRepository, ResetRecord, ResumeRepository,
    UserRepository,
};
use jobboard_api::infra::Repositories;

// =============================================================================
// Users
// =============================================================================

#[derive(Default)]
pub struct MemUserRepo {
    pub rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemUserRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, input: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            role: input.role,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            address: input.address,
            is_active: true,
            deactivated_at: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: Uuid, update: UserProfileUpdate) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        user.name = update.name;
        user.date_of_birth = update.date_of_birth;
        user.gender = update.gender;
        user.address = update.address;
        if let Some(role) = update.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: String) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        user.password_hash = password_hash;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        let now = Utc::now();
        user.is_active = false;
        user.deactivated_at = Some(now);
        user.updated_at = now;
        Ok(user.clone())
    }

    async fn reactivate(&self, id: Uuid) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound)?;
        user.is_active = true;
        user.deactivated_at = None;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn purge_deactivated(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| {
            u.is_active || u.deactivated_at.map(|at| at >= cutoff).unwrap_or(true)
        });
        Ok((before - rows.len()) as u64)
    }
}

// =============================================================================
// Employers
// =============================================================================

#[derive(Default)]
pub struct MemEmployerRepo {
    pub rows: Mutex<Vec<Employer>>,
}

#[async_trait]
impl EmployerRepository for MemEmployerRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employer>> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Employer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }

    async fn create(&self, input: NewEmployer) -> AppResult<Employer> {
        let now = Utc::now();
        let employer = Employer {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            company_name: input.company_name,
            contact_info: input.contact_info,
            position: input.position,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(employer.clone());
        Ok(employer)
    }

    async fn update(&self, id: Uuid, update: EmployerUpdate) -> AppResult<Employer> {
        let mut rows = self.rows.lock().unwrap();
        let employer = rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound)?;
        employer.company_name = update.company_name;
        employer.contact_info = update.contact_info;
        employer.position = update.position;
        employer.updated_at = Utc::now();
        Ok(employer.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Employer>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn search_by_company(&self, fragment: &str) -> AppResult<Vec<Employer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.company_name.contains(fragment))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// =============================================================================
// Job seekers
// =============================================================================

#[derive(Default)]
pub struct MemJobSeekerRepo {
    pub rows: Mutex<Vec<JobSeeker>>,
}

#[async_trait]
impl JobSeekerRepository for MemJobSeekerRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobSeeker>> {
        Ok(self.rows.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<JobSeeker>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.user_id == user_id)
            .cloned())
    }

    async fn create(&self, input: NewJobSeeker) -> AppResult<JobSeeker> {
        let now = Utc::now();
        let job_seeker = JobSeeker {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            education_details: input.education_details,
            skills: input.skills,
            college: input.college,
            work_status: input.work_status,
            experience_years: input.experience_years,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(job_seeker.clone());
        Ok(job_seeker)
    }

    async fn update(&self, id: Uuid, update: JobSeekerUpdate) -> AppResult<JobSeeker> {
        let mut rows = self.rows.lock().unwrap();
        let job_seeker = rows
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(AppError::NotFound)?;
        job_seeker.education_details = update.education_details;
        job_seeker.skills = update.skills;
        job_seeker.college = update.college;
        job_seeker.work_status = update.work_status;
        job_seeker.experience_years = update.experience_years;
        job_seeker.updated_at = Utc::now();
        Ok(job_seeker.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|j| j.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<JobSeeker>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn search_by_college(&self, fragment: &str) -> AppResult<Vec<JobSeeker>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.college.as_deref().map_or(false, |c| c.contains(fragment)))
            .cloned()
            .collect())
    }

    async fn search_by_skill(&self, fragment: &str) -> AppResult<Vec<JobSeeker>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.skills.as_deref().map_or(false, |s| s.contains(fragment)))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// =============================================================================
// Jobs
// =============================================================================

#[derive(Default)]
pub struct MemJobRepo {
    pub rows: Mutex<Vec<Job>>,
    next_id: AtomicI32,
}

#[async_trait]
impl JobRepository for MemJobRepo {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Job>> {
        Ok(self.rows.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    async fn create(&self, input: NewJob) -> AppResult<Job> {
        let now = Utc::now();
        let job = Job {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            employer_id: input.employer_id,
            title: input.title,
            description: input.description,
            location: input.location,
            salary: input.salary,
            skills_required: input.skills_required,
            eligibility: input.eligibility,
            status: "Open".to_string(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn update(&self, id: i32, update: JobUpdate) -> AppResult<Job> {
        let mut rows = self.rows.lock().unwrap();
        let job = rows
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(AppError::NotFound)?;
        job.title = update.title;
        job.description = update.description;
        job.location = update.location;
        job.salary = update.salary;
        job.skills_required = update.skills_required;
        job.eligibility = update.eligibility;
        job.status = update.status;
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|j| j.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Job>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.employer_id == employer_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Job>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.status == status)
            .cloned()
            .collect())
    }

    async fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Job>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.title.contains(fragment))
            .cloned()
            .collect())
    }

    async fn search_by_location(&self, fragment: &str) -> AppResult<Vec<Job>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.location.contains(fragment))
            .cloned()
            .collect())
    }

    async fn search_by_skill(&self, fragment: &str) -> AppResult<Vec<Job>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| {
                j.skills_required
                    .as_deref()
                    .map_or(false, |s| s.contains(fragment))
            })
            .cloned()
            .collect())
    }

    async fn count_by_employer(&self, employer_id: Uuid) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.employer_id == employer_id)
            .count() as u64)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// =============================================================================
// Resumes
// =============================================================================

#[derive(Default)]
pub struct MemResumeRepo {
    pub rows: Mutex<Vec<Resume>>,
    next_id: AtomicI32,
}

#[async_trait]
impl ResumeRepository for MemResumeRepo {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Resume>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, input: NewResume) -> AppResult<Resume> {
        let now = Utc::now();
        let resume = Resume {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            job_seeker_id: input.job_seeker_id,
            resume_name: input.resume_name,
            file_path: input.file_path,
            file_type: input.file_type,
            parsed_skills: input.parsed_skills,
            is_default: false,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(resume.clone());
        Ok(resume)
    }

    async fn update(&self, id: i32, update: ResumeUpdate) -> AppResult<Resume> {
        let mut rows = self.rows.lock().unwrap();
        let resume = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound)?;
        resume.resume_name = update.resume_name;
        resume.file_path = update.file_path;
        resume.file_type = update.file_type;
        resume.parsed_skills = update.parsed_skills;
        resume.updated_at = Utc::now();
        Ok(resume.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Resume>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Resume>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.job_seeker_id == job_seeker_id)
            .cloned()
            .collect())
    }

    async fn count_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.job_seeker_id == job_seeker_id)
            .count() as u64)
    }

    async fn set_default_flag(&self, id: i32, is_default: bool) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let resume = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound)?;
        resume.is_default = is_default;
        resume.updated_at = Utc::now();
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// =============================================================================
// Applications
// =============================================================================

#[derive(Default)]
pub struct MemApplicationRepo {
    pub rows: Mutex<Vec<Application>>,
    next_id: AtomicI32,
}

#[async_trait]
impl ApplicationRepository for MemApplicationRepo {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Application>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, input: NewApplication) -> AppResult<Application> {
        let application = Application {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            job_id: input.job_id,
            job_seeker_id: input.job_seeker_id,
            resume_id: input.resume_id,
            cover_letter: input.cover_letter,
            status: "Applied".to_string(),
            applied_at: Utc::now(),
            reviewed_at: None,
            notes: None,
            is_shortlisted: false,
            interview_date: None,
            employer_feedback: None,
        };
        self.rows.lock().unwrap().push(application.clone());
        Ok(application)
    }

    async fn update(&self, id: i32, update: ApplicationUpdate) -> AppResult<Application> {
        let mut rows = self.rows.lock().unwrap();
        let application = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound)?;
        application.cover_letter = update.cover_letter;
        application.status = update.status;
        application.notes = update.notes;
        application.employer_feedback = update.employer_feedback;
        Ok(application.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Application>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_job(&self, job_id: i32) -> AppResult<Vec<Application>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn list_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<Vec<Application>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.job_seeker_id == job_seeker_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: &str) -> AppResult<Vec<Application>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect())
    }

    async fn count_by_job_seeker(&self, job_seeker_id: Uuid) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.job_seeker_id == job_seeker_id)
            .count() as u64)
    }

    async fn count_by_resume(&self, resume_id: i32) -> AppResult<u64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.resume_id == resume_id)
            .count() as u64)
    }

    async fn mark_reviewed(&self, id: i32, notes: Option<String>) -> AppResult<Application> {
        let mut rows = self.rows.lock().unwrap();
        let application = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound)?;
        application.reviewed_at = Some(Utc::now());
        if let Some(notes) = notes {
            application.notes = Some(notes);
        }
        Ok(application.clone())
    }

    async fn set_shortlisted(&self, id: i32, shortlisted: bool) -> AppResult<Application> {
        let mut rows = self.rows.lock().unwrap();
        let application = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound)?;
        application.is_shortlisted = shortlisted;
        Ok(application.clone())
    }

    async fn set_interview_date(&self, id: i32, date: DateTime<Utc>) -> AppResult<Application> {
        let mut rows = self.rows.lock().unwrap();
        let application = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound)?;
        application.interview_date = Some(date);
        Ok(application.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Default)]
pub struct MemNotificationRepo {
    pub rows: Mutex<Vec<Notification>>,
    next_id: AtomicI32,
}

#[async_trait]
impl NotificationRepository for MemNotificationRepo {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Notification>> {
        Ok(self.rows.lock().unwrap().iter().find(|n| n.id == id).cloned())
    }

    async fn create(
        &self,
        user_id: Uuid,
        subject: String,
        message: String,
    ) -> AppResult<Notification> {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id,
            subject,
            message,
            is_read: false,
            sent_email: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| n.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_unsent_email(&self) -> AppResult<Vec<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| !n.sent_email)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, id: i32) -> AppResult<Notification> {
        let mut rows = self.rows.lock().unwrap();
        let notification = rows
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(AppError::NotFound)?;
        notification.is_read = true;
        Ok(notification.clone())
    }

    async fn mark_email_sent(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let notification = rows
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(AppError::NotFound)?;
        notification.sent_email = true;
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// =============================================================================
// Password resets
// =============================================================================

#[derive(Default)]
pub struct MemPasswordResetRepo {
    pub rows: Mutex<Vec<ResetRecord>>,
}

#[async_trait]
impl PasswordResetRepository for MemPasswordResetRepo {
    async fn create(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> AppResult<ResetRecord> {
        let record = ResetRecord {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            expires_at,
            used: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_valid(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<ResetRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.token_hash == token_hash && !r.used && r.expires_at > now)
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let record = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound)?;
        record.used = true;
        Ok(())
    }

    async fn invalidate_for_user(&self, user_id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        for record in rows.iter_mut().filter(|r| r.user_id == user_id) {
            record.used = true;
        }
        Ok(())
    }
}

// =============================================================================
// Registry
// =============================================================================

/// In-memory repository registry handed to services under test.
/// The concrete repo fields stay public so tests can inspect state.
#[derive(Default)]
pub struct MemoryRepos {
    pub users_mem: Arc<MemUserRepo>,
    pub employers_mem: Arc<MemEmployerRepo>,
    pub job_seekers_mem: Arc<MemJobSeekerRepo>,
    pub jobs_mem: Arc<MemJobRepo>,
    pub resumes_mem: Arc<MemResumeRepo>,
    pub applications_mem: Arc<MemApplicationRepo>,
    pub notifications_mem: Arc<MemNotificationRepo>,
    pub password_resets_mem: Arc<MemPasswordResetRepo>,
}

/// Seed a user row directly through the repository.
#[allow(dead_code)]
pub async fn seed_user(repos: &MemoryRepos, email: &str, role: jobboard_api::domain::UserRole) -> User {
    repos
        .users_mem
        .create(NewUser {
            name: "Seeded User".to_string(),
            email: email.to_string(),
            password_hash: "hashed".to_string(),
            role,
            date_of_birth: None,
            gender: None,
            address: None,
        })
        .await
        .unwrap()
}

/// Seed an employer profile for a user.
#[allow(dead_code)]
pub async fn seed_employer(repos: &MemoryRepos, user_id: Uuid, company: &str) -> Employer {
    repos
        .employers_mem
        .create(NewEmployer {
            user_id,
            company_name: company.to_string(),
            contact_info: None,
            position: None,
        })
        .await
        .unwrap()
}

/// Seed a job seeker profile for a user.
#[allow(dead_code)]
pub async fn seed_job_seeker(repos: &MemoryRepos, user_id: Uuid) -> JobSeeker {
    repos
        .job_seekers_mem
        .create(NewJobSeeker {
            user_id,
            education_details: None,
            skills: Some("Rust, SQL".to_string()),
            college: Some("State College".to_string()),
            work_status: None,
            experience_years: Some(2),
        })
        .await
        .unwrap()
}

impl Repositories for MemoryRepos {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users_mem.clone()
    }

    fn employers(&self) -> Arc<dyn EmployerRepository> {
        self.employers_mem.clone()
    }

    fn job_seekers(&self) -> Arc<dyn JobSeekerRepository> {
        self.job_seekers_mem.clone()
    }

    fn jobs(&self) -> Arc<dyn JobRepository> {
        self.jobs_mem.clone()
    }

    fn resumes(&self) -> Arc<dyn ResumeRepository> {
        self.resumes_mem.clone()
    }

    fn applications(&self) -> Arc<dyn ApplicationRepository> {
        self.applications_mem.clone()
    }

    fn notifications(&self) -> Arc<dyn NotificationRepository> {
        self.notifications_mem.clone()
    }

    fn password_resets(&self) -> Arc<dyn PasswordResetRepository> {
        self.password_resets_mem.clone()
    }
}
