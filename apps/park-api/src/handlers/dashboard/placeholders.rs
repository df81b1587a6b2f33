//! 大屏占位报文
//!
//! 这些接口暂无数据来源，按与大屏前端约定的报文原样返回（字段顺序一致）。
//! 接入真实数据后替换对应函数即可。

use serde_json::{Value, json};

pub fn yq_rent() -> Value {
    json!({
        "totalArea": "280629.86",
        "rentArea": "94594.0",
        "unRentArea": "15258.0",
        "rentRate": "86.11",
        "rentAvg": "1.04"
    })
}

pub fn gy_rent() -> Value {
    json!({
        "totalRooms": 1122,
        "rentRooms": 360,
        "unRentRooms": 762,
        "roomRentRate": "32.09",
        "roomRentAvg": "0.00"
    })
}

fn money_point(time: &str, money: &str) -> Value {
    json!({ "time": time, "timeType": null, "money": money })
}

fn count_point(time: &str, count: i64) -> Value {
    json!({ "time": time, "timeType": null, "count": count })
}

pub fn finance_statistics() -> Value {
    Value::Array(vec![
        money_point("2025-05", "339700.99"),
        money_point("2025-04", "320000.50"),
        money_point("2025-03", "310000.20"),
        money_point("2025-02", "300000.10"),
        money_point("2025-01", "290000.00"),
    ])
}

pub fn forecast_statistics() -> Value {
    Value::Array(vec![
        money_point("2025-05", "292980.00"),
        money_point("2025-06", "300000.00"),
        money_point("2025-07", "310000.00"),
    ])
}

/// 开票情况；整数金额（700000.00 等）按整数输出
pub fn invoice_statistics() -> Value {
    json!([
        {
            "id": null,
            "sid": null,
            "kjType": null,
            "syncType": null,
            "yqAppCode": null,
            "createTime": null,
            "updateTime": null,
            "yqName": null,
            "time": "2024-05",
            "timeType": null,
            "totalInvoicingNumber": 0,
            "receiptNumber": 0,
            "totalInvoicingMoney": 0,
            "receiptMoney": 0,
            "sinvoicingNumber": 3,
            "pinvoicingNumber": 14,
            "sinvoicingMoney": 669705.27,
            "pinvoicingMoney": 313515
        },
        {
            "id": null,
            "sid": null,
            "kjType": null,
            "syncType": null,
            "yqAppCode": null,
            "createTime": null,
            "updateTime": null,
            "yqName": null,
            "time": "2024-06",
            "timeType": null,
            "totalInvoicingNumber": 1,
            "receiptNumber": 1,
            "totalInvoicingMoney": 1000,
            "receiptMoney": 1000,
            "sinvoicingNumber": 5,
            "pinvoicingNumber": 18,
            "sinvoicingMoney": 700000,
            "pinvoicingMoney": 350000
        },
        {
            "id": null,
            "sid": null,
            "kjType": null,
            "syncType": null,
            "yqAppCode": null,
            "createTime": null,
            "updateTime": null,
            "yqName": null,
            "time": "2024-07",
            "timeType": null,
            "totalInvoicingNumber": 2,
            "receiptNumber": 2,
            "totalInvoicingMoney": 2000,
            "receiptMoney": 2000,
            "sinvoicingNumber": 7,
            "pinvoicingNumber": 20,
            "sinvoicingMoney": 750000,
            "pinvoicingMoney": 400000
        }
    ])
}

pub fn year_agent_statistic() -> Value {
    json!({
        "newLeaseClient": 15,
        "newAgentClient": 8,
        "newLeaveClient": 2
    })
}

/// 新增客户数趋势（租赁与招商两个接口共用）
pub fn client_trend() -> Value {
    Value::Array(vec![
        count_point("2024-05", 5),
        count_point("2024-06", 8),
        count_point("2024-07", 12),
        count_point("2024-08", 10),
        count_point("2024-09", 15),
    ])
}

pub fn activity_statistic() -> Value {
    json!({
        "personCount": 8328,
        "visitCount": 0,
        "repairCount": 0,
        "msgSendCount": 5730,
        "parkMonthMoney": "7000.00",
        "parkTempMoney": "3310.00",
        "carInCount": 10944
    })
}

pub fn passenger_trend() -> Value {
    Value::Array(vec![
        count_point("2024-05", 114942),
        count_point("2024-06", 120000),
        count_point("2024-07", 118000),
        count_point("2024-08", 130000),
    ])
}

pub fn cur_month_face_times() -> Value {
    json!([
        { "time": "2025-05-20", "count": 1500 },
        { "time": "2025-05-21", "count": 1600 },
        { "time": "2025-05-22", "count": 1700 },
        { "time": "2025-05-23", "count": 1800 }
    ])
}

pub fn latest_two_face_records() -> Value {
    json!([
        {
            "id": 1,
            "personName": "张三",
            "captureTime": "2025-05-23 09:00:00",
            "imageUrl": "http://example.com/face1.jpg",
            "location": "大门入口"
        },
        {
            "id": 2,
            "personName": "李四",
            "captureTime": "2025-05-23 08:55:00",
            "imageUrl": "http://example.com/face2.jpg",
            "location": "C区电梯"
        }
    ])
}

pub fn face_trends() -> Value {
    Value::Array(vec![
        count_point("2024-05", 50318),
        count_point("2024-06", 51000),
        count_point("2024-07", 52000),
        count_point("2024-08", 53000),
    ])
}

pub fn last_record_per_device() -> Value {
    json!([
        {
            "deviceCode": "cam_001",
            "deviceName": "前台摄像头",
            "latestCapture": {
                "id": 101,
                "captureTime": "2025-05-23 09:10:00",
                "imageUrl": "http://example.com/face_cam001.jpg",
                "personName": "王五"
            }
        },
        {
            "deviceCode": "cam_002",
            "deviceName": "后门摄像头",
            "latestCapture": {
                "id": 102,
                "captureTime": "2025-05-23 09:05:00",
                "imageUrl": "http://example.com/face_cam002.jpg",
                "personName": "赵六"
            }
        }
    ])
}

pub fn honor_list() -> Value {
    json!([
        {
            "id": 1,
            "createTime": "2025-04-12 11:28:35",
            "updateTime": "2025-04-12 11:28:35",
            "yqAppCode": "dl",
            "yqName": null,
            "code": "Hdlwehwad7ajwiums8",
            "title": "达利集团荣获年度最佳创新奖",
            "content": "<p>测试内容</p><p><img src=\"https://damai-parking.oss-cn-hangzhou.aliyuncs.com/upper/pic/20241125174757/eb0e8d08-bb6e-439c-801b-e642112c9214.png\"></p>",
            "img": "https://damai-parking.oss-cn-hangzhou.aliyuncs.com/upper/pic/20240726101615/2b49909f-a95b-4890-8d0f-8ef724f2e77c.png",
            "publishTime": "2025-04-10"
        },
        {
            "id": 2,
            "createTime": "2025-03-01 10:00:00",
            "updateTime": "2025-03-01 10:00:00",
            "yqAppCode": "rcsj",
            "yqName": null,
            "code": "Hrcsjwxyz12345678",
            "title": "睿创世界获得智慧园区认证",
            "content": "<p>睿创世界通过了国家级智慧园区认证，标志着其在智慧化运营方面达到行业领先水平。</p>",
            "img": "https://damai-parking.oss-cn-hangzhou.aliyuncs.com/upper/pic/some-other-image.png",
            "publishTime": "2025-02-28"
        }
    ])
}

pub fn notice_list() -> Value {
    json!([
        {
            "id": 1,
            "title": "关于园区疫情防护措施的通知",
            "publishTime": "2025-05-20",
            "content": "请园区内所有企业和个人严格遵守最新的疫情防护指南。",
            "author": "园区管理处"
        },
        {
            "id": 2,
            "title": "智慧停车系统升级公告",
            "publishTime": "2025-05-18",
            "content": "为提升停车体验，智慧停车系统将于5月25日进行升级维护，届时可能影响部分服务。",
            "author": "技术部"
        }
    ])
}

/// 资产信息；`yqAppCode` 回显参数（缺省为 `dl`）
pub fn group_one(yq_app_code: Option<&str>) -> Value {
    let yq_name = if yq_app_code == Some("dl") {
        "达利集团"
    } else {
        "默认园区"
    };
    json!({
        "id": 1,
        "createTime": "2023-12-07 11:59:04",
        "updateTime": "2023-12-07 11:59:04",
        "yqAppCode": yq_app_code.unwrap_or("dl"),
        "yqName": yq_name,
        "code": "Idlqefdwpwv9atab4t",
        "totalArea": "280629.86",
        "buildingArea": "250000",
        "buildingCount": "30",
        "selfArea": "50000",
        "rentArea": "94594.0",
        "saleArea": "100000",
        "rentReadyArea": "15258.0",
        "enterCount": 200,
        "personCount": 8328,
        "img": "https://damai-parking.oss-cn-hangzhou.aliyuncs.com/upper/pic/some-asset-image.png"
    })
}

fn output_tax(id: i64, created: &str, code: &str, year: &str, output: &str, tax: &str) -> Value {
    json!({
        "id": id,
        "createTime": created,
        "updateTime": created,
        "yqAppCode": "dl",
        "yqName": null,
        "code": code,
        "year": year,
        "outputMoney": output,
        "taxMoney": tax
    })
}

pub fn output_tax_info_list() -> Value {
    Value::Array(vec![
        output_tax(3, "2024-07-26 14:21:04", "Tdlhoou9mdn9tgfz85", "2024", "899", "439"),
        output_tax(4, "2023-07-26 14:21:04", "Tdlhoou9mdn9tgfz86", "2023", "850", "400"),
        output_tax(5, "2022-07-26 14:21:04", "Tdlhoou9mdn9tgfz87", "2022", "800", "380"),
    ])
}

pub fn represent_enter_list() -> Value {
    json!([
        {
            "id": 1,
            "createTime": "2024-07-26 13:40:30",
            "updateTime": "2024-07-26 13:40:30",
            "yqAppCode": "dl",
            "yqName": null,
            "code": "Edlufmo5z42vk5mpyz",
            "name": "XX科技有限公司",
            "industry": "互联网",
            "shortName": "XX科技",
            "tagNames": "高新技术企业,瞪羚企业",
            "tagCodes": "HT,DZ",
            "clientTag": "核心客户"
        },
        {
            "id": 2,
            "createTime": "2024-06-15 10:00:00",
            "updateTime": "2024-06-15 10:00:00",
            "yqAppCode": "rcsj",
            "yqName": null,
            "code": "Ercsjxyz987654321",
            "name": "YY生物科技公司",
            "industry": "生物医药",
            "shortName": "YY生物",
            "tagNames": "专精特新,上市企业",
            "tagCodes": "ZJTX,SS",
            "clientTag": "战略伙伴"
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_is_preserved() {
        let rent = yq_rent();
        let keys: Vec<&str> = rent
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec!["totalArea", "rentArea", "unRentArea", "rentRate", "rentAvg"]
        );
    }

    #[test]
    fn invoice_money_keeps_integral_values_compact() {
        let rows = invoice_statistics();
        assert_eq!(rows[0]["sinvoicingMoney"], json!(669705.27));
        assert_eq!(rows[1]["sinvoicingMoney"].to_string(), "700000");
        assert_eq!(rows.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn group_one_name_depends_on_code() {
        assert_eq!(group_one(Some("dl"))["yqName"], "达利集团");
        assert_eq!(group_one(None)["yqAppCode"], "dl");
        assert_eq!(group_one(None)["yqName"], "默认园区");
        assert_eq!(group_one(Some("rcsj"))["yqName"], "默认园区");
    }
}
