use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::base::{Id, LanguageString};
use super::error::IofError;
use super::time::DateTime;
use super::validation;
use super::vocab::FeeType;

/// A monetary amount. Always an exact decimal; the scale given at
/// construction (`12.50` vs `12.5`) is kept on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
}

impl Amount {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: None,
        }
    }

    pub fn with_currency(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: Some(currency.into()),
        }
    }
}

/// A fee that applies when entering a class or ordering a service.
///
/// Either an absolute `amount` or a relative `percentage` (adjusting
/// already existing fees), never both. Obtain one through [`FeeBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeeBuilder")]
pub struct Fee {
    pub(crate) id: Option<Id>,
    pub(crate) names: Vec<LanguageString>,
    pub(crate) amount: Option<Amount>,
    pub(crate) taxable_amount: Option<Amount>,
    pub(crate) percentage: Option<f64>,
    pub(crate) taxable_percentage: Option<f64>,
    pub(crate) valid_from_time: Option<DateTime>,
    pub(crate) valid_to_time: Option<DateTime>,
    pub(crate) from_date_of_birth: Option<NaiveDate>,
    pub(crate) to_date_of_birth: Option<NaiveDate>,
    pub(crate) fee_type: FeeType,
    pub(crate) modify_time: Option<DateTime>,
}

impl Fee {
    pub fn builder(name: LanguageString) -> FeeBuilder {
        FeeBuilder::new(name)
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Describing names, e.g. "Late entry fee"; never empty.
    pub fn names(&self) -> &[LanguageString] {
        &self.names
    }

    pub fn amount(&self) -> Option<&Amount> {
        self.amount.as_ref()
    }

    /// Part of the amount considered when calculating taxes.
    pub fn taxable_amount(&self) -> Option<&Amount> {
        self.taxable_amount.as_ref()
    }

    pub fn percentage(&self) -> Option<f64> {
        self.percentage
    }

    pub fn taxable_percentage(&self) -> Option<f64> {
        self.taxable_percentage
    }

    pub fn valid_from_time(&self) -> Option<DateTime> {
        self.valid_from_time
    }

    pub fn valid_to_time(&self) -> Option<DateTime> {
        self.valid_to_time
    }

    pub fn from_date_of_birth(&self) -> Option<NaiveDate> {
        self.from_date_of_birth
    }

    pub fn to_date_of_birth(&self) -> Option<NaiveDate> {
        self.to_date_of_birth
    }

    pub fn fee_type(&self) -> FeeType {
        self.fee_type
    }

    pub fn modify_time(&self) -> Option<DateTime> {
        self.modify_time
    }
}

/// Builder for [`Fee`]; `build()` enforces the fee rules.
///
/// ```
/// use iof_xml::core::*;
/// use rust_decimal::Decimal;
///
/// let fee = FeeBuilder::new(LanguageString::new("Entry fee"))
///     .amount(Amount::with_currency(Decimal::new(1250, 2), "EUR"))
///     .build()
///     .unwrap();
/// assert_eq!(fee.amount().unwrap().amount.to_string(), "12.50");
///
/// let err = FeeBuilder::new(LanguageString::new("Broken"))
///     .amount(Amount::new(Decimal::TEN))
///     .percentage(5.0)
///     .build()
///     .unwrap_err();
/// assert_eq!(err.rule_ids(), vec!["FEE-1"]);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FeeBuilder {
    id: Option<Id>,
    names: Vec<LanguageString>,
    amount: Option<Amount>,
    taxable_amount: Option<Amount>,
    percentage: Option<f64>,
    taxable_percentage: Option<f64>,
    valid_from_time: Option<DateTime>,
    valid_to_time: Option<DateTime>,
    from_date_of_birth: Option<NaiveDate>,
    to_date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    fee_type: FeeType,
    modify_time: Option<DateTime>,
}

impl FeeBuilder {
    pub fn new(name: LanguageString) -> Self {
        Self {
            id: None,
            names: vec![name],
            amount: None,
            taxable_amount: None,
            percentage: None,
            taxable_percentage: None,
            valid_from_time: None,
            valid_to_time: None,
            from_date_of_birth: None,
            to_date_of_birth: None,
            fee_type: FeeType::Normal,
            modify_time: None,
        }
    }

    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Add the name in another language.
    pub fn name(mut self, name: LanguageString) -> Self {
        self.names.push(name);
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn taxable_amount(mut self, amount: Amount) -> Self {
        self.taxable_amount = Some(amount);
        self
    }

    pub fn percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }

    pub fn taxable_percentage(mut self, percentage: f64) -> Self {
        self.taxable_percentage = Some(percentage);
        self
    }

    pub fn valid_from_time(mut self, time: DateTime) -> Self {
        self.valid_from_time = Some(time);
        self
    }

    pub fn valid_to_time(mut self, time: DateTime) -> Self {
        self.valid_to_time = Some(time);
        self
    }

    /// Restrict the fee to competitors born in `[from, to]`; either bound may be open.
    pub fn birth_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from_date_of_birth = from;
        self.to_date_of_birth = to;
        self
    }

    pub fn fee_type(mut self, fee_type: FeeType) -> Self {
        self.fee_type = fee_type;
        self
    }

    pub fn modify_time(mut self, time: DateTime) -> Self {
        self.modify_time = Some(time);
        self
    }

    /// Build the fee, running every fee rule. All violations are reported.
    pub fn build(self) -> Result<Fee, IofError> {
        if self.names.is_empty() {
            return Err(IofError::Validation(vec![super::error::ValidationError::new(
                "names",
                "a fee needs at least one name",
            )]));
        }
        validation::checked(Fee {
            id: self.id,
            names: self.names,
            amount: self.amount,
            taxable_amount: self.taxable_amount,
            percentage: self.percentage,
            taxable_percentage: self.taxable_percentage,
            valid_from_time: self.valid_from_time,
            valid_to_time: self.valid_to_time,
            from_date_of_birth: self.from_date_of_birth,
            to_date_of_birth: self.to_date_of_birth,
            fee_type: self.fee_type,
            modify_time: self.modify_time,
        })
    }
}

impl TryFrom<FeeBuilder> for Fee {
    type Error = IofError;

    fn try_from(builder: FeeBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// A fee assigned to a competitor or team, with the amount actually paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedFee {
    pub fee: Fee,
    pub paid_amount: Option<Amount>,
    pub modify_time: Option<DateTime>,
}

impl AssignedFee {
    pub fn new(fee: Fee) -> Self {
        Self {
            fee,
            paid_amount: None,
            modify_time: None,
        }
    }
}
