// Tables are produced by the upstream ETL/prediction pipeline; identifiers keep their stored casing.

diesel::table! {
    #[sql_name = "Final_Data"]
    final_data (ticker, date) {
        #[sql_name = "Date"]
        date -> Date,
        #[sql_name = "Ticker"]
        ticker -> Text,
        #[sql_name = "Open"]
        open -> Float8,
        #[sql_name = "High"]
        high -> Float8,
        #[sql_name = "Low"]
        low -> Float8,
        #[sql_name = "Close"]
        close -> Float8,
        #[sql_name = "Volume"]
        volume -> Int8,
        #[sql_name = "Sector"]
        sector -> Text,
        #[sql_name = "Industry"]
        industry -> Text,
    }
}

diesel::table! {
    #[sql_name = "Summary"]
    summary (ticker) {
        #[sql_name = "Ticker"]
        ticker -> Text,
        #[sql_name = "Initial_Open"]
        initial_open -> Float8,
        #[sql_name = "Final_Close"]
        final_close -> Float8,
        #[sql_name = "Total_Change"]
        total_change -> Float8,
        #[sql_name = "Percentage_Change"]
        percentage_change -> Float8,
        #[sql_name = "Average_Volume"]
        average_volume -> Float8,
        #[sql_name = "Sector"]
        sector -> Text,
        #[sql_name = "Industry"]
        industry -> Text,
    }
}

diesel::table! {
    #[sql_name = "Total_Volume"]
    total_volume (year, ticker) {
        year -> Int8,
        ticker -> Text,
        #[sql_name = "total_volume"]
        yearly_total -> Int8,
        sector -> Text,
    }
}

diesel::table! {
    #[sql_name = "Industry_Volume"]
    industry_volume (sector, industry) {
        sector -> Text,
        industry -> Text,
        total_volume -> Int8,
    }
}

diesel::table! {
    #[sql_name = "data_with_prediction"]
    data_with_prediction (ticker, date) {
        #[sql_name = "Close"]
        close -> Float8,
        #[sql_name = "Date"]
        date -> Date,
        #[sql_name = "Ticker"]
        ticker -> Text,
        #[sql_name = "Sector"]
        sector -> Text,
        #[sql_name = "Industry"]
        industry -> Text,
    }
}

diesel::table! {
    #[sql_name = "Predicted_Summary"]
    predicted_summary (ticker) {
        #[sql_name = "Ticker"]
        ticker -> Text,
        #[sql_name = "Today_price"]
        today_price -> Float8,
        #[sql_name = "Predicted_price"]
        predicted_price -> Float8,
        #[sql_name = "Predicted_Change"]
        predicted_change -> Float8,
        #[sql_name = "Percentage_Change"]
        percentage_change -> Float8,
        #[sql_name = "Sector"]
        sector -> Text,
        #[sql_name = "Industry"]
        industry -> Text,
    }
}
