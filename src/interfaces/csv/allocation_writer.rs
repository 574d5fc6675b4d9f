use crate::domain::allocation::Allocation;
use crate::error::ReportError;
use std::io::Write;

/// Writes an allocation as `<method-id> <amount>` lines.
///
/// Methods that were never charged are left out. Lines follow the
/// allocation's order, highest discount first.
pub struct AllocationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AllocationWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_allocation(&mut self, allocation: &Allocation) -> Result<(), ReportError> {
        for (method, amount) in allocation.charged() {
            let amount = amount.to_string();
            self.writer.write_record([method.id(), amount.as_str()])?;
        }
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
