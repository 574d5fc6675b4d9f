use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::RecordSource;
use crate::error::LoadError;
use crate::interfaces::json::record_reader::JsonRecordReader;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Loads orders and payment methods from two JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    orders_path: PathBuf,
    payment_methods_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(orders_path: impl Into<PathBuf>, payment_methods_path: impl Into<PathBuf>) -> Self {
        Self {
            orders_path: orders_path.into(),
            payment_methods_path: payment_methods_path.into(),
        }
    }
}

fn open(path: &Path) -> Result<JsonRecordReader<BufReader<File>>, LoadError> {
    let origin = path.display().to_string();
    match File::open(path) {
        Ok(file) => Ok(JsonRecordReader::new(BufReader::new(file), origin)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(LoadError::NotFound { origin, source })
        }
        Err(source) => Err(LoadError::Io { origin, source }),
    }
}

impl RecordSource for JsonFileSource {
    fn orders(&self) -> Result<Vec<Order>, LoadError> {
        open(&self.orders_path)?.orders()
    }

    fn payment_methods(&self) -> Result<Vec<PaymentMethod>, LoadError> {
        open(&self.payment_methods_path)?.payment_methods()
    }
}
