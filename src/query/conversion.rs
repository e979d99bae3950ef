//! Conversions, date parts and type predicates.

unary! {
    to_string => ToString;
    to_number => ToNumber;
    to_time => ToTime;
    to_date => ToDate;
    /// Seconds since the Unix epoch
    to_seconds => ToSeconds;
    to_millis => ToMillis;
    to_micros => ToMicros;
    year => Year;
    month => Month;
    hour => Hour;
    minute => Minute;
    second => Second;
    day_of_month => DayOfMonth;
    day_of_week => DayOfWeek;
    day_of_year => DayOfYear;
}

unary! {
    is_number => IsNumber;
    is_double => IsDouble;
    is_integer => IsInteger;
    is_boolean => IsBoolean;
    is_null => IsNull;
    is_bytes => IsBytes;
    is_timestamp => IsTimestamp;
    is_date => IsDate;
    is_string => IsString;
    is_array => IsArray;
    is_object => IsObject;
    is_ref => IsRef;
    is_set => IsSet;
    /// True for documents and document references
    is_doc => IsDoc;
    is_lambda => IsLambda;
    is_collection => IsCollection;
    is_database => IsDatabase;
    is_index => IsIndex;
    is_function => IsFunction;
    is_key => IsKey;
    is_token => IsToken;
    is_credentials => IsCredentials;
    is_role => IsRole;
}
