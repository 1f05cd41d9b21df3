//! Litter aggregate.
//!
//! A litter is one reproduction cycle of a dam and sire. It is created by a
//! mating and then moves forward through pregnancy confirmation and birth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::gestation::expected_birth_date;
use super::{BirthType, LitterStatus, MatingType, PregnancyTestMethod};
use crate::domain::dog::Dog;
use crate::domain::foundation::{
    DogId, DomainError, ErrorCode, LitterId, Locale, StateMachine, TenantId, Timestamp,
};
use crate::domain::puppy::BirthTally;

/// Persistent state of a litter.
///
/// Adapters build a `Litter` from this record with [`Litter::reconstitute`]
/// and read it back with [`Litter::record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitterRecord {
    pub id: LitterId,
    pub tenant_id: TenantId,
    pub name: String,
    pub dam_id: DogId,
    pub sire_id: DogId,
    pub status: LitterStatus,
    pub heat_start_date: Option<NaiveDate>,
    pub mating_date: Option<NaiveDate>,
    pub mating_type: Option<MatingType>,
    pub pregnancy_confirmed_date: Option<NaiveDate>,
    pub pregnancy_test_method: Option<PregnancyTestMethod>,
    pub expected_birth_date: Option<NaiveDate>,
    pub actual_birth_date: Option<NaiveDate>,
    pub birth_type: Option<BirthType>,
    pub puppies_born_count: u32,
    pub puppies_alive_count: u32,
    pub males_count: u32,
    pub females_count: u32,
    pub notes: Option<String>,
    /// Optimistic concurrency token, incremented by the store on every update.
    pub version: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Details of a mating that opens a litter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mating {
    pub date: NaiveDate,
    pub mating_type: MatingType,
    pub heat_start_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Litter aggregate.
///
/// # Invariants
///
/// - `expected_birth_date == mating_date + GESTATION_DAYS` whenever a mating
///   date is set; it is never edited on its own
/// - counts are zero until a birth is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Litter {
    record: LitterRecord,
}

impl Litter {
    /// Opens a confirmed litter from a mating between `dam` and `sire`.
    pub fn from_mating(tenant_id: TenantId, dam: &Dog, sire: &Dog, mating: &Mating, locale: Locale) -> Self {
        let now = Timestamp::now();
        let mut litter = Self {
            record: LitterRecord {
                id: LitterId::new(),
                tenant_id,
                name: locale.litter_name(&dam.name, &sire.name),
                dam_id: dam.id,
                sire_id: sire.id,
                status: LitterStatus::Confirmed,
                heat_start_date: mating.heat_start_date,
                mating_date: None,
                mating_type: Some(mating.mating_type),
                pregnancy_confirmed_date: None,
                pregnancy_test_method: None,
                expected_birth_date: None,
                actual_birth_date: None,
                birth_type: None,
                puppies_born_count: 0,
                puppies_alive_count: 0,
                males_count: 0,
                females_count: 0,
                notes: mating.notes.clone(),
                version: 0,
                created_at: now,
                updated_at: now,
            },
        };
        litter.set_mating_date(mating.date);
        litter
    }

    /// Reconstitute a litter from persistence (no validation).
    pub fn reconstitute(record: LitterRecord) -> Self {
        Self { record }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn record(&self) -> &LitterRecord {
        &self.record
    }

    pub fn into_record(self) -> LitterRecord {
        self.record
    }

    pub fn id(&self) -> LitterId {
        self.record.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.record.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn dam_id(&self) -> DogId {
        self.record.dam_id
    }

    pub fn sire_id(&self) -> DogId {
        self.record.sire_id
    }

    pub fn status(&self) -> LitterStatus {
        self.record.status
    }

    pub fn heat_start_date(&self) -> Option<NaiveDate> {
        self.record.heat_start_date
    }

    pub fn mating_date(&self) -> Option<NaiveDate> {
        self.record.mating_date
    }

    pub fn mating_type(&self) -> Option<MatingType> {
        self.record.mating_type
    }

    pub fn pregnancy_confirmed_date(&self) -> Option<NaiveDate> {
        self.record.pregnancy_confirmed_date
    }

    pub fn pregnancy_test_method(&self) -> Option<PregnancyTestMethod> {
        self.record.pregnancy_test_method
    }

    pub fn expected_birth_date(&self) -> Option<NaiveDate> {
        self.record.expected_birth_date
    }

    pub fn actual_birth_date(&self) -> Option<NaiveDate> {
        self.record.actual_birth_date
    }

    pub fn birth_type(&self) -> Option<BirthType> {
        self.record.birth_type
    }

    pub fn puppies_born_count(&self) -> u32 {
        self.record.puppies_born_count
    }

    pub fn puppies_alive_count(&self) -> u32 {
        self.record.puppies_alive_count
    }

    pub fn males_count(&self) -> u32 {
        self.record.males_count
    }

    pub fn females_count(&self) -> u32 {
        self.record.females_count
    }

    pub fn notes(&self) -> Option<&str> {
        self.record.notes.as_deref()
    }

    pub fn version(&self) -> u64 {
        self.record.version
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.record.updated_at
    }

    /// Returns true if the dog is this litter's dam or sire.
    pub fn has_parent(&self, dog_id: DogId) -> bool {
        self.record.dam_id == dog_id || self.record.sire_id == dog_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a positive pregnancy test.
    ///
    /// A pregnant litter may be confirmed again (a later scan replaces the
    /// confirmation date). Litters that already whelped or were cancelled
    /// cannot be confirmed.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the litter is past the pregnancy stage
    pub fn confirm_pregnancy(
        &mut self,
        confirmation_date: NaiveDate,
        method: PregnancyTestMethod,
    ) -> Result<(), DomainError> {
        if self.record.status != LitterStatus::Pregnant {
            self.record.status = self
                .record
                .status
                .transition_to(LitterStatus::Pregnant)
                .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        }

        self.record.pregnancy_confirmed_date = Some(confirmation_date);
        self.record.pregnancy_test_method = Some(method);
        self.touch();
        Ok(())
    }

    /// Checks that puppies can still be recorded for this litter.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if a birth was already recorded or the
    ///   litter was cancelled
    pub fn ensure_can_record_birth(&self) -> Result<(), DomainError> {
        if self.record.status.can_transition_to(&LitterStatus::Born) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot record a birth for a litter in status '{}'",
                    self.record.status
                ),
            ))
        }
    }

    /// Records the whelping and the tallies of the puppy batch.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if a birth cannot be recorded in the current status
    pub fn record_birth(
        &mut self,
        birth_date: NaiveDate,
        birth_type: BirthType,
        tally: &BirthTally,
    ) -> Result<(), DomainError> {
        self.ensure_can_record_birth()?;

        self.record.status = LitterStatus::Born;
        self.record.actual_birth_date = Some(birth_date);
        self.record.birth_type = Some(birth_type);
        self.record.puppies_born_count = tally.total;
        self.record.puppies_alive_count = tally.alive;
        self.record.males_count = tally.males;
        self.record.females_count = tally.females;
        self.touch();
        Ok(())
    }

    /// Cancels the litter from any status.
    ///
    /// A non-blank reason replaces the notes; a blank one leaves them as they are.
    pub fn cancel(&mut self, reason: &str) {
        self.record.status = LitterStatus::Cancelled;
        let reason = reason.trim();
        if !reason.is_empty() {
            self.record.notes = Some(reason.to_string());
        }
        self.touch();
    }

    /// Advances the concurrency token after the store accepted an update.
    pub fn mark_saved(&mut self) {
        self.record.version += 1;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn set_mating_date(&mut self, mating_date: NaiveDate) {
        self.record.mating_date = Some(mating_date);
        self.record.expected_birth_date = Some(expected_birth_date(mating_date));
    }

    fn touch(&mut self) {
        self.record.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Sex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tenant() -> TenantId {
        TenantId::new("kennel").unwrap()
    }

    fn mated_litter() -> Litter {
        let dam = Dog::new(tenant(), "Luna", Sex::Female);
        let sire = Dog::new(tenant(), "Rex", Sex::Male);
        let mating = Mating {
            date: date(2024, 1, 10),
            mating_type: MatingType::Natural,
            heat_start_date: Some(date(2024, 1, 1)),
            notes: None,
        };
        Litter::from_mating(tenant(), &dam, &sire, &mating, Locale::En)
    }

    fn tally(total: u32, alive: u32, males: u32, females: u32) -> BirthTally {
        BirthTally {
            total,
            alive,
            males,
            females,
        }
    }

    #[test]
    fn mating_opens_confirmed_litter_with_derived_due_date() {
        let litter = mated_litter();

        assert_eq!(litter.status(), LitterStatus::Confirmed);
        assert_eq!(litter.name(), "Litter Luna x Rex");
        assert_eq!(litter.mating_date(), Some(date(2024, 1, 10)));
        assert_eq!(litter.expected_birth_date(), Some(date(2024, 3, 13)));
        assert_eq!(litter.heat_start_date(), Some(date(2024, 1, 1)));
        assert_eq!(litter.puppies_born_count(), 0);
        assert_eq!(litter.version(), 0);
    }

    #[test]
    fn confirm_pregnancy_moves_to_pregnant() {
        let mut litter = mated_litter();
        litter
            .confirm_pregnancy(date(2024, 2, 5), PregnancyTestMethod::Ultrasound)
            .unwrap();

        assert_eq!(litter.status(), LitterStatus::Pregnant);
        assert_eq!(litter.pregnancy_confirmed_date(), Some(date(2024, 2, 5)));
    }

    #[test]
    fn reconfirming_pregnancy_replaces_date() {
        let mut litter = mated_litter();
        litter
            .confirm_pregnancy(date(2024, 2, 5), PregnancyTestMethod::Palpation)
            .unwrap();
        litter
            .confirm_pregnancy(date(2024, 2, 12), PregnancyTestMethod::Ultrasound)
            .unwrap();

        assert_eq!(litter.status(), LitterStatus::Pregnant);
        assert_eq!(litter.pregnancy_confirmed_date(), Some(date(2024, 2, 12)));
        assert_eq!(
            litter.pregnancy_test_method(),
            Some(PregnancyTestMethod::Ultrasound)
        );
    }

    #[test]
    fn confirm_pregnancy_after_birth_is_rejected() {
        let mut litter = mated_litter();
        litter
            .record_birth(date(2024, 3, 12), BirthType::Natural, &tally(1, 1, 1, 0))
            .unwrap();

        let err = litter
            .confirm_pregnancy(date(2024, 3, 20), PregnancyTestMethod::Ultrasound)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn record_birth_sets_counts_and_status() {
        let mut litter = mated_litter();
        litter
            .record_birth(date(2024, 3, 12), BirthType::Cesarean, &tally(5, 4, 3, 2))
            .unwrap();

        assert_eq!(litter.status(), LitterStatus::Born);
        assert_eq!(litter.actual_birth_date(), Some(date(2024, 3, 12)));
        assert_eq!(litter.birth_type(), Some(BirthType::Cesarean));
        assert_eq!(litter.puppies_born_count(), 5);
        assert_eq!(litter.puppies_alive_count(), 4);
        assert_eq!(litter.males_count(), 3);
        assert_eq!(litter.females_count(), 2);
    }

    #[test]
    fn second_birth_is_rejected() {
        let mut litter = mated_litter();
        litter
            .record_birth(date(2024, 3, 12), BirthType::Natural, &tally(2, 2, 1, 1))
            .unwrap();

        assert!(litter.ensure_can_record_birth().is_err());
        assert_eq!(litter.puppies_born_count(), 2);
    }

    #[test]
    fn cancel_is_unconditional_and_keeps_notes_on_blank_reason() {
        let mut litter = mated_litter();
        litter
            .record_birth(date(2024, 3, 12), BirthType::Natural, &tally(1, 1, 0, 1))
            .unwrap();
        litter.cancel("Registry rejected the litter");
        assert_eq!(litter.status(), LitterStatus::Cancelled);
        assert_eq!(litter.notes(), Some("Registry rejected the litter"));

        litter.cancel("   ");
        assert_eq!(litter.status(), LitterStatus::Cancelled);
        assert_eq!(litter.notes(), Some("Registry rejected the litter"));
    }

    #[test]
    fn mark_saved_advances_version() {
        let mut litter = mated_litter();
        litter.mark_saved();
        litter.mark_saved();
        assert_eq!(litter.version(), 2);
    }

    #[test]
    fn has_parent_matches_dam_and_sire_only() {
        let litter = mated_litter();
        assert!(litter.has_parent(litter.dam_id()));
        assert!(litter.has_parent(litter.sire_id()));
        assert!(!litter.has_parent(DogId::new()));
    }

    #[test]
    fn reconstitute_round_trips_record() {
        let litter = mated_litter();
        let copy = Litter::reconstitute(litter.record().clone());
        assert_eq!(copy, litter);
    }
}
