coded_enum! {
    /// Primitive type codes a type or type property can carry.
    pub enum SdsTypeCode("type code") {
        Empty = 0,
        Object = 1,
        DBNull = 2,
        Boolean = 3,
        Char = 4,
        SByte = 5,
        Byte = 6,
        Int16 = 7,
        UInt16 = 8,
        Int32 = 9,
        UInt32 = 10,
        Int64 = 11,
        UInt64 = 12,
        Single = 13,
        Double = 14,
        Decimal = 15,
        DateTime = 16,
        String = 18,
        Guid = 19,
        DateTimeOffset = 20,
        TimeSpan = 21,
        Version = 22,
    }
}

impl SdsTypeCode {
    /// Codes the service accepts for an index (key) property.
    pub fn is_indexable(&self) -> bool {
        !matches!(
            self,
            SdsTypeCode::Empty | SdsTypeCode::Object | SdsTypeCode::DBNull | SdsTypeCode::Boolean
        )
    }
}
